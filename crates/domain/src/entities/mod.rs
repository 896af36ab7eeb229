//! Domain entities - Observations and the forecasts built from them

mod forecast;
mod observation;

pub use forecast::{Forecast, RainCategory};
pub use observation::{Observation, ObservationField, ObservationSeries};
