//! Application layer - Use cases and orchestration
//!
//! Holds the historical data port and the prediction service that ties the
//! feature pipeline and the model set together.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
