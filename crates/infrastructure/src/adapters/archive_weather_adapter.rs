//! Archive weather adapter - Implements HistoricalDataPort using integration_weather

use application::error::ApplicationError;
use application::ports::HistoricalDataPort;
use async_trait::async_trait;
use chrono::NaiveDate;
use domain::{GeoLocation, Observation, ObservationSeries};
use integration_weather::{
    ArchiveClient, ArchiveConfig, HourlyRecord, OpenMeteoArchiveClient, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for historical observations from the Open-Meteo archive
#[derive(Debug)]
pub struct ArchiveWeatherAdapter {
    client: OpenMeteoArchiveClient,
}

impl ArchiveWeatherAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(ArchiveConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: ArchiveConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoArchiveClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::DataShape(msg) => ApplicationError::DataShape(msg),
            WeatherError::ParseError(msg) => {
                ApplicationError::DataShape(format!("unreadable archive response: {msg}"))
            },
            other @ (WeatherError::ConnectionFailed(_)
            | WeatherError::RequestFailed(_)
            | WeatherError::ServiceUnavailable(_)
            | WeatherError::RateLimitExceeded
            | WeatherError::Timeout(_)) => ApplicationError::Fetch(other.to_string()),
        }
    }

    /// Convert an archive record into a domain observation
    fn map_record(record: HourlyRecord) -> Observation {
        Observation {
            timestamp: record.time,
            temperature: record.temperature,
            precipitation: record.precipitation,
            humidity: record.humidity,
            wind_speed: record.wind_speed,
            pressure: record.pressure,
        }
    }
}

#[async_trait]
impl HistoricalDataPort for ArchiveWeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn fetch(
        &self,
        location: &GeoLocation,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ObservationSeries, ApplicationError> {
        let result = self
            .client
            .get_hourly(location.latitude(), location.longitude(), start, end)
            .await
            .map_err(Self::map_error);

        let weather = match result {
            Ok(weather) => weather,
            Err(e) => {
                debug!(error = %e, "Failed to fetch historical weather");
                return Err(e);
            },
        };

        debug!(records = weather.records.len(), "Retrieved historical weather");
        let records = weather.records.into_iter().map(Self::map_record).collect();
        Ok(ObservationSeries::new(records)?)
    }
}
