//! Configuration for the gradient boosting regressor

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Hyperparameters for [`crate::GradientBoostingRegressor`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostingConfig {
    /// Number of boosting stages (trees)
    #[serde(default = "default_n_estimators")]
    pub n_estimators: usize,

    /// Shrinkage applied to each tree's contribution
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    /// Maximum depth of each regression tree
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Minimum number of samples needed to split a node
    #[serde(default = "default_min_samples_split")]
    pub min_samples_split: usize,

    /// Minimum number of samples in each leaf
    #[serde(default = "default_min_samples_leaf")]
    pub min_samples_leaf: usize,
}

const fn default_n_estimators() -> usize {
    100
}

const fn default_learning_rate() -> f64 {
    0.1
}

const fn default_max_depth() -> usize {
    3
}

const fn default_min_samples_split() -> usize {
    2
}

const fn default_min_samples_leaf() -> usize {
    1
}

impl Default for BoostingConfig {
    fn default() -> Self {
        Self {
            n_estimators: default_n_estimators(),
            learning_rate: default_learning_rate(),
            max_depth: default_max_depth(),
            min_samples_split: default_min_samples_split(),
            min_samples_leaf: default_min_samples_leaf(),
        }
    }
}

impl BoostingConfig {
    /// Check hyperparameters before fitting
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.n_estimators == 0 {
            return Err(ModelError::InvalidConfig(
                "n_estimators must be at least 1".to_string(),
            ));
        }
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(ModelError::InvalidConfig(format!(
                "learning_rate must be positive, got {}",
                self.learning_rate
            )));
        }
        if self.min_samples_split < 2 {
            return Err(ModelError::InvalidConfig(
                "min_samples_split must be at least 2".to_string(),
            ));
        }
        if self.min_samples_leaf == 0 {
            return Err(ModelError::InvalidConfig(
                "min_samples_leaf must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
