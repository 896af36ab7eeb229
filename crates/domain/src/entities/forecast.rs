//! Forecast entity
//!
//! The presentation-ready result of one prediction. Built fresh per request
//! and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Single-shot forecast with every value already rendered as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    /// Predicted temperature, e.g. `"28.4°C"`
    pub temperature: String,
    /// Precipitation prediction scaled to a percentage, e.g. `"12.0%"`
    pub rain_probability: String,
    /// Predicted relative humidity, e.g. `"74.25%"`
    pub humidity: String,
    /// Predicted wind speed, e.g. `"11.2 km/h"`
    pub wind_speed: String,
    /// One-sentence summary
    pub explanation: String,
}

/// Rain category used in the forecast summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RainCategory {
    Heavy,
    Moderate,
    Light,
    Clear,
}

impl RainCategory {
    /// Lower bound (exclusive) for heavy rainfall
    pub const HEAVY_ABOVE: f64 = 0.5;
    /// Lower bound (exclusive) for moderate rainfall
    pub const MODERATE_ABOVE: f64 = 0.2;

    /// Categorise a precipitation prediction
    ///
    /// All bounds are exclusive: exactly `0.5` is moderate, exactly `0.2`
    /// is light, and exactly `0.0` (or anything negative) is clear.
    #[must_use]
    pub fn from_precipitation(precipitation: f64) -> Self {
        if precipitation > Self::HEAVY_ABOVE {
            Self::Heavy
        } else if precipitation > Self::MODERATE_ABOVE {
            Self::Moderate
        } else if precipitation > 0.0 {
            Self::Light
        } else {
            Self::Clear
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Heavy => "heavy rainfall",
            Self::Moderate => "moderate rainfall",
            Self::Light => "light rainfall",
            Self::Clear => "clear weather",
        }
    }
}

impl fmt::Display for RainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
