//! OpenWeather One Call client
//!
//! One outbound GET per recognized location. A non-200 response is logged
//! and surfaces as `None`; the caller drops that location from the reply.
//! No retry, no backoff, no request timeout.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::metrics::MetricsCollector;

/// Default One Call API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/3.0/onecall";

/// Source of current + daily forecast data for a coordinate pair
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch the forecast payload, or `None` when the provider has nothing
    /// usable for these coordinates.
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<Option<OneCallResponse>>;
}

/// Forecast payload as returned by the One Call endpoint, trimmed to the
/// fields the bot reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneCallResponse {
    /// Present-moment conditions
    pub current: CurrentConditions,
    /// Daily series, index 0 being today
    #[serde(default)]
    pub daily: Option<Vec<DailyForecast>>,
}

/// Present-moment conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in degrees Celsius
    pub temp: f64,
    /// Weather categories, primary first
    pub weather: Vec<WeatherCondition>,
}

/// One entry of the daily forecast series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Temperature range for the day
    pub temp: DailyTemperature,
    /// Weather categories, primary first
    pub weather: Vec<WeatherCondition>,
}

/// Temperature range for a forecast day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTemperature {
    /// Minimum temperature in degrees Celsius
    pub min: f64,
}

/// A single weather category label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// Primary category, e.g. "Rain", "Clear", "Clouds"
    pub main: String,
}

impl OneCallResponse {
    /// The primary category of the current conditions, "Unknown" if the
    /// provider sent an empty weather list
    #[must_use]
    pub fn current_main(&self) -> &str {
        self.current
            .weather
            .first()
            .map_or("Unknown", |condition| condition.main.as_str())
    }
}

/// HTTP client for the One Call endpoint
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: Option<String>,
    http: Client,
    base_url: String,
    metrics: MetricsCollector,
}

impl OpenWeatherClient {
    /// Create a client. `api_key` being `None` degrades every fetch to
    /// `None` without issuing a request.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            metrics: MetricsCollector::default(),
        }
    }

    /// Override the endpoint base URL (test hook)
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }
}

#[async_trait]
impl ForecastProvider for OpenWeatherClient {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<Option<OneCallResponse>> {
        let Some(api_key) = &self.api_key else {
            warn!("No OpenWeather API key configured, skipping weather fetch");
            self.metrics.record_weather_fetch(false);
            return Ok(None);
        };

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("lat", latitude.to_string().as_str()),
                ("lon", longitude.to_string().as_str()),
                ("units", "metric"),
                ("exclude", "minutely,hourly,alerts"),
                ("appid", api_key.as_str()),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather")?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "Could not retrieve weather for {}, {}: HTTP {}",
                latitude, longitude, status
            );
            self.metrics.record_weather_fetch(false);
            return Ok(None);
        }

        let payload: OneCallResponse = response
            .json()
            .await
            .context("Failed to parse OpenWeather JSON")?;

        self.metrics.record_weather_fetch(true);
        Ok(Some(payload))
    }
}

/// Read the API key from a local file: first line, trimmed.
///
/// A missing or unreadable file is logged and yields `None`; weather lookups
/// then degrade to the no-data path instead of failing startup.
#[must_use]
pub fn read_api_key(file_path: &Path) -> Option<String> {
    match fs::read_to_string(file_path) {
        Ok(contents) => {
            let key = contents.lines().next().unwrap_or("").trim().to_string();
            if key.is_empty() {
                warn!("API key file {} is empty", file_path.display());
                None
            } else {
                info!("Loaded OpenWeather API key from {}", file_path.display());
                Some(key)
            }
        }
        Err(error) => {
            warn!(
                "The API key file {} could not be read: {}",
                file_path.display(),
                error
            );
            None
        }
    }
}
