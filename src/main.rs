use anyhow::Result;

use court_picker::cli::Command;
use court_picker::{
    handle_completions, handle_courts, handle_fairness, handle_log, handle_recommend,
    handle_serve, handle_suggest, handle_weather, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Weather => handle_weather(),
        Command::Recommend { offline } => handle_recommend(*offline),
        Command::Fairness => handle_fairness(),
        Command::Suggest { offline } => handle_suggest(*offline),
        Command::Log { court, date } => handle_log(court, *date),
        Command::Courts { filter, query } => handle_courts(*filter, query.clone()),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
