//! Forecast location and training window configuration.

use domain::GeoLocation;
use serde::{Deserialize, Serialize};

/// Geographic location configuration (latitude/longitude pair)
///
/// Configured as inline table: `{ latitude = 19.076, longitude = 72.8777 }`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocationConfig {
    /// Convert to the domain value object
    ///
    /// Coordinates are not range-checked; the upstream API is the judge.
    #[must_use]
    pub const fn to_geo_location(&self) -> GeoLocation {
        GeoLocation::new(self.latitude, self.longitude)
    }
}

impl Default for GeoLocationConfig {
    fn default() -> Self {
        let mumbai = GeoLocation::mumbai();
        Self {
            latitude: mumbai.latitude(),
            longitude: mumbai.longitude(),
        }
    }
}

/// Forecast configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastAppConfig {
    /// Coordinates every forecast is computed for
    #[serde(default)]
    pub location: GeoLocationConfig,

    /// Days of history used for training and prediction (default: 30)
    #[serde(default = "default_training_window_days")]
    pub training_window_days: u32,
}

const fn default_training_window_days() -> u32 {
    30
}

impl Default for ForecastAppConfig {
    fn default() -> Self {
        Self {
            location: GeoLocationConfig::default(),
            training_window_days: default_training_window_days(),
        }
    }
}
