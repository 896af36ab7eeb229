//! Prediction service
//!
//! Fetches a trailing window of observations, cleans it, and runs the
//! per-parameter models on its latest hour. Fitted models live in an
//! immutable snapshot behind [`ArcSwap`]: predictions load it without
//! locking while retrains build a new set and swap it in.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, Days, NaiveDate, Utc};
use domain::{Forecast, GeoLocation, ObservationField, ObservationSeries, WeatherParameter, clean};
use forecast_core::{BoostingConfig, ParameterModelSet};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use super::forecast_formatter::{format_forecast, round_to_cents};
use crate::{error::ApplicationError, ports::HistoricalDataPort};

/// Default number of trailing days used for training and prediction
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Settings for the prediction service
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSettings {
    /// Coordinates every forecast is computed for
    pub location: GeoLocation,
    /// Length of the trailing window in days
    pub window_days: u32,
    /// Hyperparameters for every parameter model
    pub boosting: BoostingConfig,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            location: GeoLocation::mumbai(),
            window_days: DEFAULT_WINDOW_DAYS,
            boosting: BoostingConfig::default(),
        }
    }
}

/// Metadata about the most recent successful training run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub trained_at: DateTime<Utc>,
    /// Number of hourly records the models were fitted on
    pub samples: usize,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
}

/// Current state of the model set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelStatus {
    pub trained: bool,
    pub parameters: Vec<WeatherParameter>,
    pub location: String,
    pub window_days: u32,
    pub last_training: Option<TrainingSummary>,
}

#[derive(Debug)]
struct ModelSnapshot {
    models: ParameterModelSet,
    summary: Option<TrainingSummary>,
}

impl ModelSnapshot {
    fn untrained(config: &BoostingConfig) -> Self {
        Self {
            models: ParameterModelSet::new(config),
            summary: None,
        }
    }
}

/// Single-shot forecast use case
pub struct PredictionService {
    source: Arc<dyn HistoricalDataPort>,
    settings: ForecastSettings,
    snapshot: ArcSwap<ModelSnapshot>,
    train_lock: Mutex<()>,
}

impl fmt::Debug for PredictionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredictionService")
            .field("settings", &self.settings)
            .field("trained", &self.is_trained())
            .finish_non_exhaustive()
    }
}

impl PredictionService {
    /// Create a service with untrained models
    pub fn new(source: Arc<dyn HistoricalDataPort>, settings: ForecastSettings) -> Self {
        let snapshot = ModelSnapshot::untrained(&settings.boosting);
        Self {
            source,
            settings,
            snapshot: ArcSwap::from_pointee(snapshot),
            train_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &ForecastSettings {
        &self.settings
    }

    /// Whether a trained model set is currently installed
    pub fn is_trained(&self) -> bool {
        self.snapshot.load().models.is_trained()
    }

    /// Report training state and the last training summary
    pub fn status(&self) -> ModelStatus {
        let snapshot = self.snapshot.load();
        ModelStatus {
            trained: snapshot.models.is_trained(),
            parameters: WeatherParameter::ALL.to_vec(),
            location: self.settings.location.to_string(),
            window_days: self.settings.window_days,
            last_training: snapshot.summary.clone(),
        }
    }

    /// Fit a fresh model set on the current trailing window and install it
    ///
    /// Concurrent calls run one after another. Predictions keep using the
    /// previous snapshot until the swap.
    #[instrument(skip(self), fields(window_days = self.settings.window_days))]
    pub async fn train(&self) -> Result<TrainingSummary, ApplicationError> {
        let _guard = self.train_lock.lock().await;

        let (start, end) = self.window()?;
        let series = self.fetch_clean(start, end).await?;

        let config = self.settings.boosting.clone();
        let models = tokio::task::spawn_blocking(move || {
            let mut models = ParameterModelSet::new(&config);
            models.train(&series).map(|()| models)
        })
        .await
        .map_err(|e| ApplicationError::Internal(format!("Training task failed: {e}")))??;

        let summary = TrainingSummary {
            trained_at: Utc::now(),
            samples: models.samples(),
            window_start: start,
            window_end: end,
        };
        self.snapshot.store(Arc::new(ModelSnapshot {
            models,
            summary: Some(summary.clone()),
        }));

        info!(
            samples = summary.samples,
            window_start = %start,
            window_end = %end,
            "Models trained"
        );
        Ok(summary)
    }

    /// Forecast from the latest hour of a freshly fetched window
    ///
    /// `location_name` and `target_date` are recorded but not used: the
    /// forecast always comes from the configured coordinates and the most
    /// recent observation.
    #[instrument(skip(self))]
    pub async fn predict(
        &self,
        location_name: &str,
        target_date: &str,
    ) -> Result<Forecast, ApplicationError> {
        debug!(
            location = %self.settings.location,
            "Request location and date are not used for inference"
        );

        let (start, end) = self.window()?;
        let series = self.fetch_clean(start, end).await?;

        let snapshot = self.snapshot.load();
        let predictions = snapshot.models.predict_latest(&series)?.map(round_to_cents);
        debug!(?predictions, "Rounded predictions");

        Ok(format_forecast(&predictions))
    }

    /// Trailing window ending today (UTC)
    fn window(&self) -> Result<(NaiveDate, NaiveDate), ApplicationError> {
        let end = Utc::now().date_naive();
        let start = end
            .checked_sub_days(Days::new(u64::from(self.settings.window_days)))
            .ok_or_else(|| {
                ApplicationError::Configuration(format!(
                    "training window of {} days is out of range",
                    self.settings.window_days
                ))
            })?;
        Ok((start, end))
    }

    async fn fetch_clean(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ObservationSeries, ApplicationError> {
        let raw = self
            .source
            .fetch(&self.settings.location, start, end)
            .await?;
        let missing: usize = ObservationField::ALL
            .iter()
            .map(|&field| raw.missing_count(field))
            .sum();
        debug!(records = raw.len(), missing, %start, %end, "Fetched observation window");
        Ok(clean(&raw)?)
    }
}
