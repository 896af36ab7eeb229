//! Open-Meteo archive API response models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Raw archive API response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ArchiveResponse {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub hourly: Option<HourlyData>,
}

/// Column-oriented hourly data as sent by the API
///
/// Every value array is expected to line up with `time`. Columns the API
/// omits deserialize as empty and are caught by the length check.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct HourlyData {
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation: Vec<Option<f64>>,
    #[serde(default)]
    pub relative_humidity_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub wind_speed_10m: Vec<Option<f64>>,
    #[serde(default)]
    pub surface_pressure: Vec<Option<f64>>,
}

impl HourlyData {
    /// Name and length of every value column
    pub fn column_lengths(&self) -> [(&'static str, usize); 5] {
        [
            ("temperature_2m", self.temperature_2m.len()),
            ("precipitation", self.precipitation.len()),
            ("relative_humidity_2m", self.relative_humidity_2m.len()),
            ("wind_speed_10m", self.wind_speed_10m.len()),
            ("surface_pressure", self.surface_pressure.len()),
        ]
    }
}

/// One hour of observations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    /// Local time of the observation
    pub time: NaiveDateTime,
    /// Air temperature at 2 m (°C)
    pub temperature: Option<f64>,
    /// Precipitation sum for the preceding hour (mm)
    pub precipitation: Option<f64>,
    /// Relative humidity at 2 m (%)
    pub humidity: Option<f64>,
    /// Wind speed at 10 m (km/h)
    pub wind_speed: Option<f64>,
    /// Surface pressure (hPa)
    pub pressure: Option<f64>,
}

/// Hourly observations for one location and date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalWeather {
    /// Grid-cell latitude the API resolved to
    pub latitude: Option<f64>,
    /// Grid-cell longitude the API resolved to
    pub longitude: Option<f64>,
    /// Records in API order
    pub records: Vec<HourlyRecord>,
}
