//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server and logging settings
//! - `forecast`: forecast location and training window
//!
//! The archive client and model hyperparameters reuse the config types of
//! their own crates.

mod forecast;
mod server;

use application::ForecastSettings;
use forecast_core::BoostingConfig;
use integration_weather::ArchiveConfig;
use serde::{Deserialize, Serialize};

pub use forecast::{ForecastAppConfig, GeoLocationConfig};
pub use server::{LogFormat, ServerConfig};

/// Prefix for environment overrides
///
/// Sections and keys are joined with a double underscore so that keys may
/// contain single underscores, e.g. `WEATHERCAST_SERVER__PORT` or
/// `WEATHERCAST_FORECAST__TRAINING_WINDOW_DAYS`.
pub const ENV_PREFIX: &str = "WEATHERCAST";

/// Separator between nested keys in environment overrides
pub const ENV_SEPARATOR: &str = "__";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Open-Meteo archive configuration
    #[serde(default)]
    pub weather: ArchiveConfig,

    /// Forecast location and window
    #[serde(default)]
    pub forecast: ForecastAppConfig,

    /// Gradient boosting hyperparameters
    #[serde(default)]
    pub model: BoostingConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(
            config::File::with_name("config").required(false),
            Self::environment(),
        )
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
    }

    fn load_with<S>(file: S, env: config::Environment) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8001)?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., WEATHERCAST_SERVER__PORT)
            .add_source(env);

        let config = builder.build()?;
        let app: Self = config.try_deserialize()?;
        app.model
            .validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(app)
    }

    /// Settings for the prediction service
    #[must_use]
    pub fn forecast_settings(&self) -> ForecastSettings {
        ForecastSettings {
            location: self.forecast.location.to_geo_location(),
            window_days: self.forecast.training_window_days,
            boosting: self.model.clone(),
        }
    }
}
