//! Open-Meteo archive integration
//!
//! Client for the Open-Meteo Historical Weather API
//! (<https://open-meteo.com/en/docs/historical-weather-api>).
//! Returns hourly observations over a date range without requiring an API key.

pub mod client;
mod models;

pub use client::{ArchiveClient, ArchiveConfig, OpenMeteoArchiveClient, WeatherError};
pub use models::{HistoricalWeather, HourlyRecord};
