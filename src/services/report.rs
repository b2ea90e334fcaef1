use chrono::NaiveDateTime;
use colored::Colorize;

use crate::domain::hours::{availability_status, OpenState};
use crate::domain::{Court, Session, Weather};
use crate::fairness::{format_minutes, FairnessSummary};
use crate::recommendation::Recommendation;
use crate::scheduling::Suggestion;

pub fn print_recommendation(recommendation: &Recommendation) {
    let court = &recommendation.court;
    println!("{} {}", "Recommended:".bold(), court.name.green().bold());
    println!("  {}", court.address.dimmed());
    println!(
        "  Drive: Andrey {} · Lucas {}",
        format_minutes(court.drive.andrey),
        format_minutes(court.drive.lucas)
    );
    println!("  {}", recommendation.reasoning);
    println!();
    println!("{}", "Ranking (lower is better):".bold());
    for (idx, scored) in recommendation.ranked.iter().enumerate() {
        println!(
            "  {}. {:<24} {:>6.1}  (balance {}, commute {})",
            idx + 1,
            scored.court.short_name,
            scored.score,
            format_minutes(scored.balance_diff),
            format_minutes(scored.combined)
        );
    }
}

pub fn print_fairness(summary: &FairnessSummary, sessions: &[Session]) {
    println!("{} {}", "Drive totals:".bold(), summary.summary);
    println!("  Driven more so far: {}", summary.lead.to_string().yellow());
    if let Some(last) = crate::fairness::most_recent_session(sessions) {
        println!("  Last session: {} at {}", last.date, last.court_name);
    } else {
        println!("  No sessions logged yet");
    }
}

pub fn print_suggestions(suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("{}", "No shared availability at an acceptable court.".yellow());
        return;
    }
    println!("{}", "Suggested slots:".bold());
    for suggestion in suggestions {
        let risk = if suggestion.weather_risk {
            " rain risk".red().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} {:<9} {:<22} {:>6.1}  {}{}",
            suggestion.day.label(),
            suggestion.slot_label,
            suggestion.court_name,
            suggestion.score,
            suggestion.reason.dimmed(),
            risk
        );
    }
}

pub fn print_weather(weather: Option<&Weather>, rain_threshold: u8) {
    let Some(weather) = weather else {
        println!("{}", "Weather unavailable; treating the forecast as dry.".yellow());
        return;
    };
    let temp = weather
        .current_temp
        .map_or_else(|| "--".to_string(), |t| format!("{t}°C"));
    println!("{} {} {}", "Now:".bold(), temp, weather.description);
    for day in &weather.forecast {
        let chance = format!("{}% rain", day.rain_probability);
        let chance = if day.rain_probability >= rain_threshold {
            chance.red()
        } else {
            chance.normal()
        };
        println!("  {}  {:<20} {}", day.date, day.description, chance);
    }
    println!("  {}", weather.advice(rain_threshold).italic());
}

pub fn print_courts(courts: &[&Court], now: NaiveDateTime) {
    for court in courts {
        let status = availability_status(court, now);
        let label = match status.state {
            OpenState::Open => status.label.green(),
            OpenState::Soon => status.label.yellow(),
            OpenState::Closed => status.label.red(),
        };
        println!(
            "{:<12} {:<22} {:<8} {:<5} {:.1}★  {}",
            court.id,
            court.name,
            court.court_type.as_str(),
            court.surface.as_str(),
            court.rating,
            label
        );
        println!(
            "             {} · {} · Andrey {} · Lucas {}",
            court.pricing.display,
            court.booking_platform,
            format_minutes(court.drive.andrey),
            format_minutes(court.drive.lucas)
        );
    }
}
