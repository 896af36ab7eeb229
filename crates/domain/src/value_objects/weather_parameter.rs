//! Weather parameter value object
//!
//! The measured quantities that get their own regression model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A modelled weather parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherParameter {
    /// Air temperature at 2m (°C)
    Temperature,
    /// Precipitation (mm)
    Precipitation,
    /// Relative humidity at 2m (%)
    Humidity,
    /// Wind speed at 10m (km/h)
    WindSpeed,
}

impl WeatherParameter {
    /// Every modelled parameter, in training order
    pub const ALL: [Self; 4] = [
        Self::Temperature,
        Self::Precipitation,
        Self::Humidity,
        Self::WindSpeed,
    ];

    /// Stable snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Precipitation => "precipitation",
            Self::Humidity => "humidity",
            Self::WindSpeed => "wind_speed",
        }
    }
}

impl fmt::Display for WeatherParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_each_parameter_once() {
        let mut names: Vec<_> = WeatherParameter::ALL.iter().map(|p| p.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn display_uses_snake_case() {
        assert_eq!(WeatherParameter::WindSpeed.to_string(), "wind_speed");
        assert_eq!(WeatherParameter::Temperature.to_string(), "temperature");
    }

    #[test]
    fn serde_matches_display() {
        let json = serde_json::to_string(&WeatherParameter::WindSpeed).unwrap();
        assert_eq!(json, "\"wind_speed\"");
    }
}
