//! Open-Meteo archive client
//!
//! HTTP client for the Open-Meteo Historical Weather API.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ArchiveResponse, HistoricalWeather, HourlyData, HourlyRecord};

/// Hourly variables requested from the archive, in response column order
pub const HOURLY_VARIABLES: &str =
    "temperature_2m,precipitation,relative_humidity_2m,wind_speed_10m,surface_pressure";

const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Request did not complete within the configured timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Response parsed but its hourly columns do not line up
    #[error("Unexpected response shape: {0}")]
    DataShape(String),
}

/// Archive client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Archive API base URL (default: <https://archive-api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://archive-api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Client for hourly historical observations
#[async_trait]
pub trait ArchiveClient: Send + Sync {
    /// Get hourly observations for every hour of `start_date..=end_date`
    ///
    /// Coordinates and date order are sent as given; the API decides what
    /// is acceptable.
    async fn get_hourly(
        &self,
        latitude: f64,
        longitude: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<HistoricalWeather, WeatherError>;
}

/// Open-Meteo archive HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoArchiveClient {
    client: Client,
    config: ArchiveConfig,
}

impl OpenMeteoArchiveClient {
    /// Create a new archive client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ArchiveConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn archive_url(&self) -> String {
        format!("{}/archive", self.config.base_url.trim_end_matches('/'))
    }

    fn map_send_error(&self, err: &reqwest::Error) -> WeatherError {
        if err.is_timeout() {
            WeatherError::Timeout(self.config.timeout_secs)
        } else if err.is_connect() {
            WeatherError::ConnectionFailed(err.to_string())
        } else {
            WeatherError::RequestFailed(err.to_string())
        }
    }

    /// Turn column-oriented hourly data into records
    fn parse_hourly(hourly: HourlyData) -> Result<Vec<HourlyRecord>, WeatherError> {
        let expected = hourly.time.len();
        if let Some((name, len)) = hourly
            .column_lengths()
            .into_iter()
            .find(|(_, len)| *len != expected)
        {
            return Err(WeatherError::DataShape(format!(
                "column '{name}' has {len} values but 'time' has {expected}"
            )));
        }

        let HourlyData {
            time,
            temperature_2m,
            precipitation,
            relative_humidity_2m,
            wind_speed_10m,
            surface_pressure,
        } = hourly;

        time.iter()
            .enumerate()
            .map(|(i, raw)| {
                let time = NaiveDateTime::parse_from_str(raw, TIME_FORMAT).map_err(|e| {
                    WeatherError::DataShape(format!("invalid timestamp '{raw}' at index {i}: {e}"))
                })?;
                Ok(HourlyRecord {
                    time,
                    temperature: temperature_2m[i],
                    precipitation: precipitation[i],
                    humidity: relative_humidity_2m[i],
                    wind_speed: wind_speed_10m[i],
                    pressure: surface_pressure[i],
                })
            })
            .collect()
    }
}

#[async_trait]
impl ArchiveClient for OpenMeteoArchiveClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_hourly(
        &self,
        latitude: f64,
        longitude: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<HistoricalWeather, WeatherError> {
        let url = self.archive_url();
        debug!(url = %url, %start_date, %end_date, "Fetching hourly archive");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("start_date", start_date.format("%Y-%m-%d").to_string()),
                ("end_date", end_date.format("%Y-%m-%d").to_string()),
                ("hourly", HOURLY_VARIABLES.to_string()),
            ])
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_send_error(&e))?;
        let api_response: ArchiveResponse =
            serde_json::from_slice(&body).map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let hourly = api_response.hourly.ok_or_else(|| {
            WeatherError::DataShape("No hourly data in response".to_string())
        })?;
        let records = Self::parse_hourly(hourly)?;
        debug!(records = records.len(), "Parsed hourly archive");

        Ok(HistoricalWeather {
            latitude: api_response.latitude,
            longitude: api_response.longitude,
            records,
        })
    }
}
