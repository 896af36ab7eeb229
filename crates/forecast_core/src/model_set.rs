//! Per-parameter model set
//!
//! One [`ParameterModel`] per [`WeatherParameter`], all trained on the same
//! feature matrix against their own observed column. Training and
//! evaluation use the same window; there is no held-out split.

use domain::{DomainError, ObservationField, ObservationSeries, WeatherParameter, featurize};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{config::BoostingConfig, error::ModelError, model::ParameterModel, ports::FeatureRow};

/// One prediction per weather parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Predictions {
    pub temperature: f64,
    pub precipitation: f64,
    pub humidity: f64,
    pub wind_speed: f64,
}

impl Predictions {
    #[must_use]
    pub const fn get(&self, parameter: WeatherParameter) -> f64 {
        match parameter {
            WeatherParameter::Temperature => self.temperature,
            WeatherParameter::Precipitation => self.precipitation,
            WeatherParameter::Humidity => self.humidity,
            WeatherParameter::WindSpeed => self.wind_speed,
        }
    }

    const fn set(&mut self, parameter: WeatherParameter, value: f64) {
        match parameter {
            WeatherParameter::Temperature => self.temperature = value,
            WeatherParameter::Precipitation => self.precipitation = value,
            WeatherParameter::Humidity => self.humidity = value,
            WeatherParameter::WindSpeed => self.wind_speed = value,
        }
    }

    /// Apply `f` to every value
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            temperature: f(self.temperature),
            precipitation: f(self.precipitation),
            humidity: f(self.humidity),
            wind_speed: f(self.wind_speed),
        }
    }
}

/// Models for every weather parameter
#[derive(Debug)]
pub struct ParameterModelSet {
    models: Vec<ParameterModel>,
    samples: usize,
}

impl ParameterModelSet {
    /// Unfitted models for every parameter
    #[must_use]
    pub fn new(config: &BoostingConfig) -> Self {
        Self {
            models: WeatherParameter::ALL
                .iter()
                .map(|&p| ParameterModel::new(p, config))
                .collect(),
            samples: 0,
        }
    }

    /// Whether every parameter has a fitted model
    #[must_use]
    pub fn is_trained(&self) -> bool {
        WeatherParameter::ALL.iter().all(|&p| {
            self.models
                .iter()
                .any(|m| m.parameter() == p && m.is_fitted())
        })
    }

    /// Rows used by the last successful `train`
    #[must_use]
    pub const fn samples(&self) -> usize {
        self.samples
    }

    /// Fit every parameter's scaler and regressor on a cleaned series
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EmptyTrainingSet` for an empty series, or a
    /// domain error if the series still has gaps.
    #[instrument(skip_all, fields(samples = series.len()))]
    pub fn train(&mut self, series: &ObservationSeries) -> Result<(), ModelError> {
        if series.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }

        let rows: Vec<FeatureRow> = featurize(series)?.iter().map(|f| f.as_row()).collect();

        for model in &mut self.models {
            let parameter = model.parameter();
            let targets = series.values(ObservationField::from(parameter))?;
            model.fit(&rows, &targets)?;
            debug!(%parameter, regressor = model.regressor_name(), "Parameter model trained");
        }

        self.samples = rows.len();
        Ok(())
    }

    /// Predict every parameter from the most recent record of a cleaned series
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Untrained` before `train` has succeeded.
    #[instrument(skip_all, fields(records = series.len()))]
    pub fn predict_latest(&self, series: &ObservationSeries) -> Result<Predictions, ModelError> {
        if !self.is_trained() {
            return Err(ModelError::Untrained);
        }

        let features = featurize(series)?;
        let latest = features.last().ok_or_else(|| {
            DomainError::data_shape("cannot predict from an empty observation series")
        })?;
        let row = latest.as_row();

        let mut predictions = Predictions::default();
        for model in &self.models {
            predictions.set(model.parameter(), model.predict(&row)?);
        }

        debug!(?predictions, "Predicted latest hour");
        Ok(predictions)
    }
}
