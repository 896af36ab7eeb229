//! Port definitions for the regression models
//!
//! A [`crate::ParameterModel`] pairs one [`FeatureScaler`] with one
//! [`Regressor`]. Any implementation with single-shot `fit` and pointwise
//! `predict` can stand in for the defaults.

use std::fmt;

use domain::features::FEATURE_COUNT;

use crate::error::ModelError;

/// One numeric feature row, in `FeatureVector::as_row` order
pub type FeatureRow = [f64; FEATURE_COUNT];

/// Fitted feature normalisation
pub trait FeatureScaler: fmt::Debug + Send + Sync {
    /// Learn the transform from a feature matrix
    fn fit(&mut self, rows: &[FeatureRow]) -> Result<(), ModelError>;

    /// Apply the learned transform to a single row
    fn transform(&self, row: &FeatureRow) -> Result<FeatureRow, ModelError>;

    /// Whether `fit` has completed
    fn is_fitted(&self) -> bool;

    /// Fit, then transform every row
    fn fit_transform(&mut self, rows: &[FeatureRow]) -> Result<Vec<FeatureRow>, ModelError> {
        self.fit(rows)?;
        rows.iter().map(|row| self.transform(row)).collect()
    }
}

/// Regression from a (scaled) feature row to a scalar
pub trait Regressor: fmt::Debug + Send + Sync {
    /// Fit against `targets`, one per row
    fn fit(&mut self, rows: &[FeatureRow], targets: &[f64]) -> Result<(), ModelError>;

    /// Predict a single row
    fn predict(&self, row: &FeatureRow) -> Result<f64, ModelError>;

    /// Whether `fit` has completed
    fn is_fitted(&self) -> bool;

    /// Short name for logs
    fn name(&self) -> &'static str;
}
