use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::state::CourtFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Tennis court picker for Andrey and Lucas")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Show the current forecast and the rain advice
    Weather,
    /// Recommend the fairest court for the next session
    Recommend {
        /// Score without fetching the forecast
        #[arg(long)]
        offline: bool,
    },
    /// Show drive totals and the session history
    Fairness,
    /// Suggest shared time slots at the courts both players accept
    Suggest {
        /// Score without fetching the forecast
        #[arg(long)]
        offline: bool,
    },
    /// Log a played session
    Log {
        /// Court id, e.g. 316-tennis
        #[arg(short, long)]
        court: String,
        /// Session date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// List courts with their opening status
    Courts {
        /// Court type filter, saved for the next run
        #[arg(short, long, value_enum)]
        filter: Option<CourtFilter>,
        /// Search by name or address, saved for the next run
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_command() {
        let cli = Cli::try_parse_from(["court_picker", "log", "--court", "adams", "--date", "2024-04-02"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Log {
                court: "adams".into(),
                date: NaiveDate::from_ymd_opt(2024, 4, 2),
            }
        );
    }

    #[test]
    fn test_parse_courts_filter() {
        let cli = Cli::try_parse_from(["court_picker", "courts", "--filter", "clay"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Courts {
                filter: Some(CourtFilter::Clay),
                query: None,
            }
        );
    }

    #[test]
    fn test_serve_default_port() {
        let cli = Cli::try_parse_from(["court_picker", "serve"]).unwrap();
        assert_eq!(cli.command, Command::Serve { port: 3000 });
    }
}
