//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic location with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl GeoLocation {
    /// Create a location
    ///
    /// Coordinates are not range-checked. The archive client forwards
    /// whatever it is given to the provider.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Well-known locations
impl GeoLocation {
    /// Mumbai, India (the service's default forecast location)
    #[must_use]
    pub const fn mumbai() -> Self {
        Self::new(19.0760, 72.8777)
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self::mumbai()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let loc = GeoLocation::new(19.076, 72.8777);
        assert!((loc.latitude() - 19.076).abs() < f64::EPSILON);
        assert!((loc.longitude() - 72.8777).abs() < f64::EPSILON);
    }

    #[test]
    fn test_out_of_range_values_are_kept() {
        let loc = GeoLocation::new(123.0, -400.0);
        assert!((loc.latitude() - 123.0).abs() < f64::EPSILON);
        assert!((loc.longitude() + 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display() {
        let loc = GeoLocation::mumbai();
        assert_eq!(loc.to_string(), "19.0760, 72.8777");
    }

    #[test]
    fn test_default_is_mumbai() {
        assert_eq!(GeoLocation::default(), GeoLocation::mumbai());
    }

    #[test]
    fn test_serialization() {
        let loc = GeoLocation::mumbai();
        let json = serde_json::to_string(&loc).expect("serialize");
        assert!(json.contains("19.076"));
        assert!(json.contains("72.8777"));

        let deserialized: GeoLocation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loc, deserialized);
    }
}
