use chrono::Datelike;
use log::debug;
use serde::Serialize;

use crate::config::settings::SchedulingSettings;
use crate::domain::{Court, Day, Player, TimeSlot, Weather};

/// A (day, slot, court) combination both players can make.
/// Higher scores are better.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub day: Day,
    pub slot: TimeSlot,
    pub slot_label: &'static str,
    pub court_id: String,
    pub court_name: String,
    pub first_drive: u32,
    pub second_drive: u32,
    pub total_commute: u32,
    pub fairness: u32,
    pub score: f64,
    pub reason: &'static str,
    pub weather_risk: bool,
}

/// Enumerates every mutually available slot at every court both players
/// accept, and keeps the best few.
pub fn build_suggestions(
    first: &Player,
    second: &Player,
    courts: &[Court],
    weather: Option<&Weather>,
    settings: &SchedulingSettings,
) -> Vec<Suggestion> {
    let preferences = first.preferences.shared(&second.preferences);
    let eligible: Vec<&Court> = courts.iter().filter(|c| preferences.accepts(c)).collect();
    let mut suggestions = Vec::new();

    for day in Day::ALL {
        for slot in TimeSlot::ALL {
            if !first.availability.is_available(day, slot)
                || !second.availability.is_available(day, slot)
            {
                continue;
            }
            for court in &eligible {
                suggestions.push(score_slot(first, second, day, slot, court, weather, settings));
            }
        }
    }

    debug!(
        "Scored {} slot combinations for {} and {}",
        suggestions.len(),
        first.name,
        second.name
    );

    suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
    suggestions.truncate(settings.max_suggestions);
    suggestions
}

fn score_slot(
    first: &Player,
    second: &Player,
    day: Day,
    slot: TimeSlot,
    court: &Court,
    weather: Option<&Weather>,
    settings: &SchedulingSettings,
) -> Suggestion {
    let first_drive = court.drive.get(first.id);
    let second_drive = court.drive.get(second.id);
    let total_commute = first_drive + second_drive;
    let fairness = first_drive.abs_diff(second_drive);

    let score = settings.base_score - total_commute as f64 - fairness as f64
        + court.rating * settings.rating_weight
        + evening_bonus(day, slot, settings);

    Suggestion {
        id: format!("{}-{}-{}", day.index(), slot.index(), court.id),
        day,
        slot,
        slot_label: slot.label(),
        court_id: court.id.clone(),
        court_name: court.name.clone(),
        first_drive,
        second_drive,
        total_commute,
        fairness,
        score,
        reason: build_reason(total_commute, fairness, court.rating),
        weather_risk: weather_risk(day, court, weather, settings.rain_threshold),
    }
}

pub fn evening_bonus(day: Day, slot: TimeSlot, settings: &SchedulingSettings) -> f64 {
    if day.is_weekday() && slot.index() >= settings.evening_slot_index {
        settings.evening_bonus
    } else {
        0.0
    }
}

/// Outdoor court on a forecast day that looks wet
pub fn weather_risk(day: Day, court: &Court, weather: Option<&Weather>, threshold: u8) -> bool {
    if court.is_indoor() {
        return false;
    }
    weather.is_some_and(|w| {
        w.forecast.iter().any(|forecast| {
            Day::from_weekday(forecast.date.weekday()) == day && forecast.rain_probability >= threshold
        })
    })
}

fn build_reason(total_commute: u32, fairness: u32, rating: f64) -> &'static str {
    if fairness <= 5 && rating >= 4.6 {
        "Best balance of commute and quality"
    } else if total_commute <= 40 {
        "Shortest total drive time"
    } else if rating >= 4.7 {
        "Top-rated courts"
    } else {
        "Great overall balance"
    }
}
