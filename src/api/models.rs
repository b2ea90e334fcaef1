use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{AvailabilityStatus, Court, Weather};
use crate::state::CourtFilter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtListItem {
    pub court: Court,
    pub status: AvailabilityStatus,
    pub next_open: String,
    pub selected: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtListResponse {
    pub items: Vec<CourtListItem>,
    pub total: usize,
}

#[derive(Deserialize, Default)]
pub struct CourtParams {
    pub filter: Option<CourtFilter>,
    pub query: Option<String>,
    pub selected: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct ForecastParams {
    /// Skip the weather fetch and score with no forecast
    #[serde(default)]
    pub offline: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub court_id: String,
    pub date: Option<NaiveDate>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResponse {
    pub weather: Option<Weather>,
    pub rainy: bool,
    pub advice: Option<&'static str>,
}
