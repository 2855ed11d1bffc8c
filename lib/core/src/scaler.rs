use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Standardizes feature columns to zero mean and unit variance.
///
/// Fitted statistics are the per-column mean and population standard
/// deviation (ddof = 0) of the data passed to [`StandardScaler::fit`]. A
/// zero-variance column transforms to all zeros rather than dividing by zero;
/// a flat column carries no information and drops out of the cosine angle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f32>,
    std: Vec<f32>,
}

impl StandardScaler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_fitted(&self) -> bool {
        !self.mean.is_empty()
    }

    /// Fitted per-column means. Empty until `fit` succeeds.
    #[must_use]
    pub fn mean(&self) -> &[f32] {
        &self.mean
    }

    /// Fitted per-column standard deviations. Empty until `fit` succeeds.
    #[must_use]
    pub fn std(&self) -> &[f32] {
        &self.std
    }

    /// Compute per-column mean and population standard deviation.
    ///
    /// Fails if there are fewer than two rows, rows disagree on width, or any
    /// value is non-finite. A failed fit leaves previously fitted state
    /// untouched.
    pub fn fit(&mut self, rows: &[Vec<f32>]) -> Result<()> {
        if rows.len() < 2 {
            return Err(Error::NotEnoughPlayers { actual: rows.len() });
        }
        let width = rows[0].len();
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(Error::InvalidDimension {
                    expected: width,
                    actual: values.len(),
                });
            }
            for (column, value) in values.iter().enumerate() {
                if !value.is_finite() {
                    return Err(Error::NonFinite { row, column });
                }
            }
        }

        let n = rows.len() as f32;
        let mut mean = vec![0.0f32; width];
        for values in rows {
            for (m, v) in mean.iter_mut().zip(values) {
                *m += v;
            }
        }
        for m in &mut mean {
            *m /= n;
        }

        let mut variance = vec![0.0f32; width];
        for values in rows {
            for ((acc, v), m) in variance.iter_mut().zip(values).zip(&mean) {
                let centered = v - m;
                *acc += centered * centered;
            }
        }
        let std = variance.iter().map(|v| (v / n).sqrt()).collect();

        self.mean = mean;
        self.std = std;
        Ok(())
    }

    /// Rescale rows with the fitted statistics.
    pub fn transform(&self, rows: &[Vec<f32>]) -> Result<Vec<Vec<f32>>> {
        if !self.is_fitted() {
            return Err(Error::NotTrained);
        }
        let width = self.mean.len();
        rows.iter()
            .map(|values| {
                if values.len() != width {
                    return Err(Error::InvalidDimension {
                        expected: width,
                        actual: values.len(),
                    });
                }
                Ok(values
                    .iter()
                    .zip(self.mean.iter().zip(&self.std))
                    .map(|(v, (m, s))| if *s > 0.0 { (v - m) / s } else { 0.0 })
                    .collect())
            })
            .collect()
    }

    /// Fit on `rows`, then transform them.
    pub fn fit_transform(&mut self, rows: &[Vec<f32>]) -> Result<Vec<Vec<f32>>> {
        self.fit(rows)?;
        self.transform(rows)
    }
}
