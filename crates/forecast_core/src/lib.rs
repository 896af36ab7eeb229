//! Forecast core - Regression models and model management
//!
//! Provides the per-parameter model set used by the prediction pipeline:
//! a standard scaler, a gradient-boosted regression tree ensemble, and the
//! traits that let other implementations stand in for either.

pub mod config;
pub mod error;
pub mod gradient_boosting;
pub mod model;
pub mod model_set;
pub mod ports;
pub mod scaler;
mod tree;

pub use config::BoostingConfig;
pub use error::ModelError;
pub use gradient_boosting::GradientBoostingRegressor;
pub use model::ParameterModel;
pub use model_set::{ParameterModelSet, Predictions};
pub use ports::{FeatureRow, FeatureScaler, Regressor};
pub use scaler::StandardScaler;
