//! Gradient-boosted regression trees with least-squares loss
//!
//! The ensemble starts from the target mean and adds one shallow tree per
//! stage, each fitted to the current residuals and shrunk by the learning
//! rate. There is no subsampling, so fitting the same data twice yields the
//! same model.

use tracing::{debug, instrument};

use crate::{
    config::BoostingConfig,
    error::ModelError,
    ports::{FeatureRow, Regressor},
    tree::{RegressionTree, TreeParams},
};

#[derive(Debug, Clone, PartialEq)]
struct Ensemble {
    init: f64,
    trees: Vec<RegressionTree>,
}

/// Gradient boosting regressor
#[derive(Debug, Clone, PartialEq)]
pub struct GradientBoostingRegressor {
    config: BoostingConfig,
    ensemble: Option<Ensemble>,
}

impl GradientBoostingRegressor {
    #[must_use]
    pub const fn new(config: BoostingConfig) -> Self {
        Self {
            config,
            ensemble: None,
        }
    }

    /// Number of fitted stages (0 before `fit`)
    #[cfg(test)]
    pub fn stages(&self) -> usize {
        self.ensemble.as_ref().map_or(0, |e| e.trees.len())
    }

    const fn tree_params(&self) -> TreeParams {
        TreeParams {
            max_depth: self.config.max_depth,
            min_samples_split: self.config.min_samples_split,
            min_samples_leaf: self.config.min_samples_leaf,
        }
    }
}

impl Default for GradientBoostingRegressor {
    fn default() -> Self {
        Self::new(BoostingConfig::default())
    }
}

impl Regressor for GradientBoostingRegressor {
    #[instrument(skip_all, fields(samples = rows.len(), stages = self.config.n_estimators))]
    fn fit(&mut self, rows: &[FeatureRow], targets: &[f64]) -> Result<(), ModelError> {
        self.config.validate()?;
        if rows.len() != targets.len() {
            return Err(ModelError::DimensionMismatch {
                features: rows.len(),
                targets: targets.len(),
            });
        }
        if rows.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }

        let init = targets.iter().sum::<f64>() / targets.len() as f64;
        let mut current = vec![init; targets.len()];
        let mut residuals = vec![0.0; targets.len()];
        let mut trees = Vec::with_capacity(self.config.n_estimators);
        let params = self.tree_params();

        for _ in 0..self.config.n_estimators {
            for ((r, y), f) in residuals.iter_mut().zip(targets).zip(&current) {
                *r = y - f;
            }
            let tree = RegressionTree::fit(rows, &residuals, params);
            for (f, row) in current.iter_mut().zip(rows) {
                *f = self.config.learning_rate.mul_add(tree.predict(row), *f);
            }
            trees.push(tree);
        }

        let mse = targets
            .iter()
            .zip(&current)
            .map(|(y, f)| (y - f).powi(2))
            .sum::<f64>()
            / targets.len() as f64;
        debug!(init, training_mse = mse, "Gradient boosting fitted");

        self.ensemble = Some(Ensemble { init, trees });
        Ok(())
    }

    fn predict(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        let ensemble = self
            .ensemble
            .as_ref()
            .ok_or(ModelError::NotFitted("GradientBoostingRegressor"))?;

        Ok(ensemble.trees.iter().fold(ensemble.init, |acc, tree| {
            self.config.learning_rate.mul_add(tree.predict(row), acc)
        }))
    }

    fn is_fitted(&self) -> bool {
        self.ensemble.is_some()
    }

    fn name(&self) -> &'static str {
        "gradient_boosting"
    }
}
