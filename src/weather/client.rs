use anyhow::{Context, Result};
use log::{error, info};
use reqwest::Client;
use std::time::Duration;

use super::payload::WttrResponse;
use crate::config::settings::WeatherSettings;
use crate::domain::Weather;
use crate::errors::weather_context;

/// Forecast client for wttr.in
pub struct WeatherClient {
    client: Client,
    base_url: String,
    location: String,
    forecast_days: usize,
}

impl WeatherClient {
    pub fn new(settings: &WeatherSettings, location: &str) -> Result<Self> {
        let client = Self::build_client(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            location: location.to_string(),
            forecast_days: settings.forecast_days,
        })
    }

    /// Location from `WEATHER_LOCATION`, falling back to the configured default
    pub fn from_env(settings: &WeatherSettings) -> Result<Self> {
        let location = std::env::var("WEATHER_LOCATION")
            .unwrap_or_else(|_| settings.default_location.to_string());
        Self::new(settings, &location)
    }

    pub async fn fetch(&self) -> Result<Weather> {
        let url = self.build_url();
        info!("Fetching weather for {} from {}", self.location, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| weather_context(&url))?;

        if !response.status().is_success() {
            anyhow::bail!("Weather service returned status: {}", response.status());
        }

        let payload: WttrResponse = response
            .json()
            .await
            .context("Failed to parse weather response")?;

        Ok(payload.into_weather(self.forecast_days))
    }

    /// Fetch, degrading to no forecast on any failure
    pub async fn fetch_or_none(&self) -> Option<Weather> {
        match self.fetch().await {
            Ok(weather) => Some(weather),
            Err(e) => {
                error!("Weather fetch failed: {:?}", e);
                None
            }
        }
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    fn build_url(&self) -> String {
        format!(
            "{}/{}?format=j1",
            self.base_url,
            urlencoding::encode(&self.location)
        )
    }
}
