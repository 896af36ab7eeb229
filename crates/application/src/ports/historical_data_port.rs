//! Historical weather data port
//!
//! Defines the interface for retrieving hourly observations over a date
//! window.

use async_trait::async_trait;
use chrono::NaiveDate;
use domain::{GeoLocation, ObservationSeries};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for hourly historical observations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HistoricalDataPort: Send + Sync {
    /// Fetch every hourly record between `start` and `end` (inclusive)
    ///
    /// Coordinates and date order are passed through as given. Records come
    /// back in time order with missing values left as `None`. Implementations
    /// must not cache: each call hits the upstream source.
    async fn fetch(
        &self,
        location: &GeoLocation,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ObservationSeries, ApplicationError>;
}
