//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer, loads configuration
//! and sets up logging.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ForecastAppConfig, GeoLocationConfig, LogFormat, ServerConfig};
pub use telemetry::{DEFAULT_LOG_FILTER, init_tracing};
