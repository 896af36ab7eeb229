//! A scaler and regressor pair for one weather parameter

use domain::WeatherParameter;

use crate::{
    config::BoostingConfig,
    error::ModelError,
    gradient_boosting::GradientBoostingRegressor,
    ports::{FeatureRow, FeatureScaler, Regressor},
    scaler::StandardScaler,
};

/// Model for a single weather parameter
#[derive(Debug)]
pub struct ParameterModel {
    parameter: WeatherParameter,
    scaler: Box<dyn FeatureScaler>,
    regressor: Box<dyn Regressor>,
}

impl ParameterModel {
    /// Unfitted standard scaler + gradient boosting pair
    #[must_use]
    pub fn new(parameter: WeatherParameter, config: &BoostingConfig) -> Self {
        Self::with_parts(
            parameter,
            Box::new(StandardScaler::new()),
            Box::new(GradientBoostingRegressor::new(config.clone())),
        )
    }

    /// Build from any scaler/regressor implementation
    #[must_use]
    pub fn with_parts(
        parameter: WeatherParameter,
        scaler: Box<dyn FeatureScaler>,
        regressor: Box<dyn Regressor>,
    ) -> Self {
        Self {
            parameter,
            scaler,
            regressor,
        }
    }

    #[must_use]
    pub const fn parameter(&self) -> WeatherParameter {
        self.parameter
    }

    #[must_use]
    pub fn regressor_name(&self) -> &'static str {
        self.regressor.name()
    }

    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.scaler.is_fitted() && self.regressor.is_fitted()
    }

    /// Fit the scaler on `rows`, then the regressor on the scaled rows
    pub fn fit(&mut self, rows: &[FeatureRow], targets: &[f64]) -> Result<(), ModelError> {
        let scaled = self.scaler.fit_transform(rows)?;
        self.regressor.fit(&scaled, targets)
    }

    /// Scale one row and predict it
    pub fn predict(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        let scaled = self.scaler.transform(row)?;
        self.regressor.predict(&scaled)
    }
}
