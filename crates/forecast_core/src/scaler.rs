//! Standard scaler - zero mean, unit variance per column

use crate::{
    error::ModelError,
    ports::{FeatureRow, FeatureScaler},
};

#[derive(Debug, Clone, PartialEq)]
struct ScalerParams {
    mean: FeatureRow,
    scale: FeatureRow,
}

/// Per-column standardisation using the population standard deviation
///
/// A column with zero variance keeps a scale of `1.0`, so it maps to zero
/// instead of dividing by zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandardScaler {
    params: Option<ScalerParams>,
}

impl StandardScaler {
    #[must_use]
    pub const fn new() -> Self {
        Self { params: None }
    }

    /// Fitted column means
    #[must_use]
    pub fn mean(&self) -> Option<&FeatureRow> {
        self.params.as_ref().map(|p| &p.mean)
    }

    /// Fitted column scales
    #[must_use]
    pub fn scale(&self) -> Option<&FeatureRow> {
        self.params.as_ref().map(|p| &p.scale)
    }
}

impl FeatureScaler for StandardScaler {
    fn fit(&mut self, rows: &[FeatureRow]) -> Result<(), ModelError> {
        if rows.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }
        let n = rows.len() as f64;

        let mut mean = FeatureRow::default();
        for row in rows {
            for (m, x) in mean.iter_mut().zip(row) {
                *m += x;
            }
        }
        for m in &mut mean {
            *m /= n;
        }

        let mut scale = FeatureRow::default();
        for row in rows {
            for ((s, x), m) in scale.iter_mut().zip(row).zip(&mean) {
                *s += (x - m).powi(2);
            }
        }
        for s in &mut scale {
            let std_dev = (*s / n).sqrt();
            *s = if std_dev > f64::EPSILON { std_dev } else { 1.0 };
        }

        self.params = Some(ScalerParams { mean, scale });
        Ok(())
    }

    fn transform(&self, row: &FeatureRow) -> Result<FeatureRow, ModelError> {
        let params = self
            .params
            .as_ref()
            .ok_or(ModelError::NotFitted("StandardScaler"))?;

        let mut out = FeatureRow::default();
        for (i, value) in out.iter_mut().enumerate() {
            *value = (row[i] - params.mean[i]) / params.scale[i];
        }
        Ok(out)
    }

    fn is_fitted(&self) -> bool {
        self.params.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<FeatureRow> {
        vec![
            [0.0, 1.0, 7.0, 20.0, 60.0, 5.0],
            [1.0, 1.0, 7.0, 22.0, 70.0, 10.0],
            [2.0, 1.0, 7.0, 24.0, 80.0, 15.0],
        ]
    }

    #[test]
    fn transform_before_fit_fails() {
        let scaler = StandardScaler::new();
        assert!(!scaler.is_fitted());
        assert_eq!(
            scaler.transform(&[0.0; 6]),
            Err(ModelError::NotFitted("StandardScaler"))
        );
    }

    #[test]
    fn fit_rejects_empty_matrix() {
        let mut scaler = StandardScaler::new();
        assert_eq!(scaler.fit(&[]), Err(ModelError::EmptyTrainingSet));
    }

    #[test]
    fn fit_learns_mean_and_population_std() {
        let mut scaler = StandardScaler::new();
        scaler.fit(&rows()).unwrap();

        let mean = scaler.mean().unwrap();
        assert!((mean[0] - 1.0).abs() < 1e-12);
        assert!((mean[3] - 22.0).abs() < 1e-12);

        // population std of [20, 22, 24] is sqrt(8/3)
        let scale = scaler.scale().unwrap();
        assert!((scale[3] - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn constant_column_maps_to_zero() {
        let mut scaler = StandardScaler::new();
        let scaled = scaler.fit_transform(&rows()).unwrap();

        // day and month never change
        assert!(scaled.iter().all(|r| r[1].abs() < 1e-12 && r[2].abs() < 1e-12));
        assert!((scaler.scale().unwrap()[1] - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scaled_columns_are_centred() {
        let mut scaler = StandardScaler::new();
        let scaled = scaler.fit_transform(&rows()).unwrap();
        for col in 0..6 {
            let sum: f64 = scaled.iter().map(|r| r[col]).sum();
            assert!(sum.abs() < 1e-9, "column {col} not centred");
        }
    }

    #[test]
    fn refit_replaces_parameters() {
        let mut scaler = StandardScaler::new();
        scaler.fit(&rows()).unwrap();
        scaler.fit(&[[10.0; 6], [20.0; 6]]).unwrap();
        assert!((scaler.mean().unwrap()[0] - 15.0).abs() < 1e-12);
    }
}
