//! Hourly weather observations
//!
//! An [`ObservationSeries`] is the tabular time series produced from one
//! archive response. Values are optional until the series has been cleaned.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{errors::DomainError, value_objects::WeatherParameter};

/// A measured column of the observation series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationField {
    Temperature,
    Precipitation,
    Humidity,
    WindSpeed,
    Pressure,
}

impl ObservationField {
    /// Every measured field, in column order
    pub const ALL: [Self; 5] = [
        Self::Temperature,
        Self::Precipitation,
        Self::Humidity,
        Self::WindSpeed,
        Self::Pressure,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Precipitation => "precipitation",
            Self::Humidity => "humidity",
            Self::WindSpeed => "wind_speed",
            Self::Pressure => "pressure",
        }
    }
}

impl fmt::Display for ObservationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<WeatherParameter> for ObservationField {
    fn from(parameter: WeatherParameter) -> Self {
        match parameter {
            WeatherParameter::Temperature => Self::Temperature,
            WeatherParameter::Precipitation => Self::Precipitation,
            WeatherParameter::Humidity => Self::Humidity,
            WeatherParameter::WindSpeed => Self::WindSpeed,
        }
    }
}

/// One hourly record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Start of the hour this record covers
    pub timestamp: NaiveDateTime,
    /// Temperature in °C
    pub temperature: Option<f64>,
    /// Precipitation in mm
    pub precipitation: Option<f64>,
    /// Relative humidity in %
    pub humidity: Option<f64>,
    /// Wind speed in km/h
    pub wind_speed: Option<f64>,
    /// Surface pressure in hPa
    pub pressure: Option<f64>,
}

impl Observation {
    /// Create a record with every field present
    #[must_use]
    pub const fn complete(
        timestamp: NaiveDateTime,
        temperature: f64,
        precipitation: f64,
        humidity: f64,
        wind_speed: f64,
        pressure: f64,
    ) -> Self {
        Self {
            timestamp,
            temperature: Some(temperature),
            precipitation: Some(precipitation),
            humidity: Some(humidity),
            wind_speed: Some(wind_speed),
            pressure: Some(pressure),
        }
    }

    /// Value of a field, if present
    #[must_use]
    pub const fn value(&self, field: ObservationField) -> Option<f64> {
        match field {
            ObservationField::Temperature => self.temperature,
            ObservationField::Precipitation => self.precipitation,
            ObservationField::Humidity => self.humidity,
            ObservationField::WindSpeed => self.wind_speed,
            ObservationField::Pressure => self.pressure,
        }
    }

    /// Value of a field, or a `MissingValue` error naming this record
    pub fn require(&self, field: ObservationField, index: usize) -> Result<f64, DomainError> {
        self.value(field)
            .ok_or(DomainError::MissingValue { field, index })
    }

    pub(crate) const fn slot_mut(&mut self, field: ObservationField) -> &mut Option<f64> {
        match field {
            ObservationField::Temperature => &mut self.temperature,
            ObservationField::Precipitation => &mut self.precipitation,
            ObservationField::Humidity => &mut self.humidity,
            ObservationField::WindSpeed => &mut self.wind_speed,
            ObservationField::Pressure => &mut self.pressure,
        }
    }
}

/// Hourly observations ordered by strictly increasing timestamp
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObservationSeries {
    records: Vec<Observation>,
}

impl ObservationSeries {
    /// Build a series, checking timestamp order
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DataShape` if two records share a timestamp or
    /// a timestamp goes backwards.
    pub fn new(records: Vec<Observation>) -> Result<Self, DomainError> {
        if let Some(pos) = records
            .windows(2)
            .position(|pair| pair[0].timestamp >= pair[1].timestamp)
        {
            return Err(DomainError::data_shape(format!(
                "timestamps must be strictly increasing, got {} followed by {}",
                records[pos].timestamp,
                records[pos + 1].timestamp
            )));
        }
        Ok(Self { records })
    }

    /// An empty series
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[Observation] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent record
    #[must_use]
    pub fn last(&self) -> Option<&Observation> {
        self.records.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.records.iter()
    }

    /// Raw column for a field, missing values included
    #[must_use]
    pub fn column(&self, field: ObservationField) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.value(field)).collect()
    }

    /// Complete column for a field
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingValue` for the first gap found.
    pub fn values(&self, field: ObservationField) -> Result<Vec<f64>, DomainError> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| r.require(field, i))
            .collect()
    }

    /// Number of missing values in a field
    #[must_use]
    pub fn missing_count(&self, field: ObservationField) -> usize {
        self.records
            .iter()
            .filter(|r| r.value(field).is_none())
            .count()
    }

    pub(crate) fn records_mut(&mut self) -> &mut [Observation] {
        &mut self.records
    }
}

impl<'a> IntoIterator for &'a ObservationSeries {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
