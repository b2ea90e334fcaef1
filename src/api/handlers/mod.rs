use anyhow::{Context, Result};
use std::sync::Arc;

use crate::domain::Weather;
use crate::services::planning::PlanningService;
use crate::weather::WeatherClient;

pub mod courts;
pub mod planning;

pub struct AppState {
    pub planner: PlanningService,
    pub weather: WeatherClient,
}

impl AppState {
    /// Current forecast, unless the caller asked to skip it
    pub async fn forecast(&self, offline: bool) -> Option<Weather> {
        if offline {
            return None;
        }
        self.weather.fetch_or_none().await
    }

    /// Run a planner call on the blocking pool; it reads and writes the state file
    pub async fn with_planner<T, F>(self: &Arc<Self>, call: F) -> Result<T>
    where
        F: FnOnce(&PlanningService) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let state = Arc::clone(self);
        tokio::task::spawn_blocking(move || call(&state.planner))
            .await
            .context("join planner task failed")?
    }
}
