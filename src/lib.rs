pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fairness;
pub mod recommendation;
pub mod scheduling;
pub mod services;
pub mod state;
pub mod storage;
pub mod weather;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::info;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::planning::PlanningService;
use crate::services::report;
use crate::services::server::ServerService;
use crate::state::{CourtFilter, ViewEvent};
use crate::weather::WeatherClient;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_weather() -> Result<()> {
    let config = AppConfig::new();
    let weather = fetch_forecast(&config, false)?;
    report::print_weather(weather.as_ref(), config.scoring.rain_threshold);
    Ok(())
}

pub fn handle_recommend(offline: bool) -> Result<()> {
    let config = AppConfig::new();
    let weather = fetch_forecast(&config, offline)?;
    let service = PlanningService::new(config)?;

    let recommendation = service.recommend(weather.as_ref())?;
    report::print_recommendation(&recommendation);
    Ok(())
}

pub fn handle_fairness() -> Result<()> {
    let service = PlanningService::new(AppConfig::new())?;
    let summary = service.fairness()?;
    let sessions = service.sessions()?;
    report::print_fairness(&summary, &sessions);
    Ok(())
}

pub fn handle_suggest(offline: bool) -> Result<()> {
    let config = AppConfig::new();
    let weather = fetch_forecast(&config, offline)?;
    let service = PlanningService::new(config)?;

    let suggestions = service.suggestions(weather.as_ref())?;
    info!("→ Found {} shared slots", suggestions.len());
    report::print_suggestions(&suggestions);
    Ok(())
}

pub fn handle_log(court: &str, date: Option<NaiveDate>) -> Result<()> {
    let service = PlanningService::new(AppConfig::new())?;
    let date = date.unwrap_or_else(|| Local::now().date_naive());

    let session = service.log_session(court, date)?;
    info!(
        "→ Logged {} on {} (Andrey {}m, Lucas {}m)",
        session.court_name, session.date, session.drive.andrey, session.drive.lucas
    );
    report::print_fairness(&service.fairness()?, &service.sessions()?);
    Ok(())
}

pub fn handle_courts(filter: Option<CourtFilter>, query: Option<String>) -> Result<()> {
    let service = PlanningService::new(AppConfig::new())?;

    let mut events = Vec::new();
    if let Some(filter) = filter {
        events.push(ViewEvent::SetFilter(filter));
    }
    if let Some(query) = query {
        events.push(ViewEvent::SetQuery(query));
    }
    let view = service.update_view(events)?;

    let courts = view.filtered_courts(service.courts());
    report::print_courts(&courts, Local::now().naive_local());
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn fetch_forecast(config: &AppConfig, offline: bool) -> Result<Option<domain::Weather>> {
    if offline {
        info!("→ Offline, scoring without a forecast");
        return Ok(None);
    }

    let client = WeatherClient::from_env(&config.weather)?;
    let runtime = tokio::runtime::Runtime::new()?;
    Ok(runtime.block_on(client.fetch_or_none()))
}
