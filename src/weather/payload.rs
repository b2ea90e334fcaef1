use chrono::NaiveDate;
use log::warn;
use serde::Deserialize;

use crate::domain::{ForecastDay, Weather};

/// Index of the hourly entry whose description stands for the whole day (midday)
const DAY_DESCRIPTION_HOUR: usize = 4;

// --- wttr.in `format=j1` response; every value arrives as a string ---

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WttrResponse {
    pub current_condition: Vec<WttrCurrent>,
    pub weather: Vec<WttrDay>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WttrCurrent {
    #[serde(rename = "temp_C")]
    pub temp_c: String,
    #[serde(rename = "weatherDesc")]
    pub weather_desc: Vec<WttrText>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WttrText {
    pub value: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WttrDay {
    pub date: String,
    #[serde(rename = "avgtempC")]
    pub avg_temp_c: String,
    #[serde(rename = "mintempC")]
    pub min_temp_c: String,
    #[serde(rename = "maxtempC")]
    pub max_temp_c: String,
    pub hourly: Vec<WttrHour>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WttrHour {
    pub chanceofrain: String,
    #[serde(rename = "weatherDesc")]
    pub weather_desc: Vec<WttrText>,
}

impl WttrResponse {
    /// Convert to the planner's weather, keeping the first `days` forecast days
    pub fn into_weather(self, days: usize) -> Weather {
        let current = self.current_condition.into_iter().next().unwrap_or_default();

        Weather {
            current_temp: parse_temp(&current.temp_c),
            description: first_text(&current.weather_desc),
            forecast: self
                .weather
                .into_iter()
                .take(days)
                .filter_map(WttrDay::into_forecast_day)
                .collect(),
        }
    }
}

impl WttrDay {
    fn into_forecast_day(self) -> Option<ForecastDay> {
        let date = match NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            Ok(date) => date,
            Err(e) => {
                warn!("Skipping forecast day with bad date {:?}: {}", self.date, e);
                return None;
            }
        };

        let rain_probability = self
            .hourly
            .iter()
            .map(|hour| parse_chance(&hour.chanceofrain))
            .max()
            .unwrap_or(0);
        let description = self
            .hourly
            .get(DAY_DESCRIPTION_HOUR)
            .map(|hour| first_text(&hour.weather_desc))
            .unwrap_or_default();

        Some(ForecastDay {
            date,
            avg_temp: parse_temp(&self.avg_temp_c),
            min_temp: parse_temp(&self.min_temp_c),
            max_temp: parse_temp(&self.max_temp_c),
            description,
            rain_probability,
        })
    }
}

fn first_text(texts: &[WttrText]) -> String {
    texts.first().map(|t| t.value.trim().to_string()).unwrap_or_default()
}

fn parse_temp(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

fn parse_chance(value: &str) -> u8 {
    value.trim().parse::<u32>().map(|v| v.min(100) as u8).unwrap_or(0)
}
