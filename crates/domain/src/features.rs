//! Feature pipeline
//!
//! Gap filling for raw observation series and the per-hour feature vectors
//! the regression models consume.

use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};

use crate::{
    entities::{ObservationField, ObservationSeries},
    errors::DomainError,
};

/// Number of columns in a feature row
pub const FEATURE_COUNT: usize = 6;

/// Model input for one hour of observations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Hour of day (0-23)
    pub hour: u32,
    /// Day of month (1-31)
    pub day: u32,
    /// Month (1-12)
    pub month: u32,
    /// Temperature (°C)
    pub temperature: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Wind speed (km/h)
    pub wind_speed: f64,
}

impl FeatureVector {
    /// Flatten into a numeric row: hour, day, month, temperature, humidity,
    /// wind speed
    #[must_use]
    pub fn as_row(&self) -> [f64; FEATURE_COUNT] {
        [
            f64::from(self.hour),
            f64::from(self.day),
            f64::from(self.month),
            self.temperature,
            self.humidity,
            self.wind_speed,
        ]
    }
}

/// Fill gaps in every field of a series
///
/// Each field is handled on its own: a missing value takes the most recent
/// earlier value, and any gap left at the start takes the first value that
/// exists. The result has no missing values, and cleaning it again returns
/// it unchanged.
///
/// # Errors
///
/// Returns `DomainError::AllMissingField` if a non-empty series has a field
/// with no values at all. This includes `pressure`, which feeds neither the
/// features nor the targets: a window without a single pressure reading is
/// rejected rather than served.
pub fn clean(series: &ObservationSeries) -> Result<ObservationSeries, DomainError> {
    let mut cleaned = series.clone();
    if cleaned.is_empty() {
        return Ok(cleaned);
    }

    for field in ObservationField::ALL {
        let records = cleaned.records_mut();

        let first = records
            .iter()
            .find_map(|r| r.value(field))
            .ok_or(DomainError::AllMissingField(field))?;

        // Forward fill, seeded with the first value so the leading gap is
        // back-filled in the same pass.
        let mut carry = first;
        for record in records.iter_mut() {
            let slot = record.slot_mut(field);
            match *slot {
                Some(value) => carry = value,
                None => *slot = Some(carry),
            }
        }
    }

    Ok(cleaned)
}

/// Derive one feature vector per record, in series order
///
/// # Errors
///
/// Returns `DomainError::MissingValue` if a record still has a gap in one of
/// the copied fields (the series was not cleaned).
pub fn featurize(series: &ObservationSeries) -> Result<Vec<FeatureVector>, DomainError> {
    series
        .iter()
        .enumerate()
        .map(|(index, record)| {
            Ok(FeatureVector {
                hour: record.timestamp.hour(),
                day: record.timestamp.day(),
                month: record.timestamp.month(),
                temperature: record.require(ObservationField::Temperature, index)?,
                humidity: record.require(ObservationField::Humidity, index)?,
                wind_speed: record.require(ObservationField::WindSpeed, index)?,
            })
        })
        .collect()
}
