//! Lagged regression design built from a differenced series.

use ndarray::{Array1, Array2};

use crate::error::ForecastError;

/// Regression inputs for an AR(p) fit.
///
/// Row `i` holds `x[i][j] = diff[i + p - j - 1]` (most recent lag in
/// column 0) and targets `y[i] = diff[i + p]`. There are
/// `diff.len() - p` rows.
#[derive(Clone, Debug, PartialEq)]
pub struct DesignMatrix {
    features: Array2<f64>,
    target: Array1<f64>,
}

impl DesignMatrix {
    /// Slides a window of `p` lags over `differenced`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ForecastError::InvalidParameter`] | `p == 0` |
    /// | [`ForecastError::InsufficientData`] | `differenced.len() <= p` (no rows) |
    pub fn from_differenced(differenced: &[f64], p: usize) -> Result<Self, ForecastError> {
        if p == 0 {
            return Err(ForecastError::InvalidParameter {
                name: "p",
                reason: "AR order must be at least 1".to_string(),
            });
        }
        let rows = differenced.len().saturating_sub(p);
        if rows == 0 {
            return Err(ForecastError::InsufficientData {
                n: differenced.len(),
                min: p + 1,
            });
        }

        let features = Array2::from_shape_fn((rows, p), |(i, j)| differenced[i + p - j - 1]);
        let target = Array1::from_shape_fn(rows, |i| differenced[i + p]);
        Ok(Self { features, target })
    }

    /// Number of regression rows.
    pub fn rows(&self) -> usize {
        self.target.len()
    }

    /// Number of lags (`p`).
    pub fn lags(&self) -> usize {
        self.features.ncols()
    }

    /// Lagged feature matrix, `rows x p`.
    pub fn features(&self) -> &Array2<f64> {
        &self.features
    }

    /// Target vector, length `rows`.
    pub fn target(&self) -> &Array1<f64> {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lags_most_recent_first() {
        let diff = [1.0, 2.0, 3.0, 4.0, 5.0];
        let dm = DesignMatrix::from_differenced(&diff, 2).unwrap();
        assert_eq!(dm.rows(), 3);
        assert_eq!(dm.lags(), 2);

        // row 0: target diff[2], lags diff[1], diff[0]
        assert_eq!(dm.features()[[0, 0]], 2.0);
        assert_eq!(dm.features()[[0, 1]], 1.0);
        assert_eq!(dm.target()[0], 3.0);

        // row 2: target diff[4], lags diff[3], diff[2]
        assert_eq!(dm.features()[[2, 0]], 4.0);
        assert_eq!(dm.features()[[2, 1]], 3.0);
        assert_eq!(dm.target()[2], 5.0);
    }

    #[test]
    fn single_row() {
        let dm = DesignMatrix::from_differenced(&[7.0, 9.0], 1).unwrap();
        assert_eq!(dm.rows(), 1);
        assert_eq!(dm.features()[[0, 0]], 7.0);
        assert_eq!(dm.target()[0], 9.0);
    }

    #[test]
    fn no_rows_is_insufficient() {
        let err = DesignMatrix::from_differenced(&[1.0, 2.0], 2).unwrap_err();
        assert_eq!(err, ForecastError::InsufficientData { n: 2, min: 3 });

        let err = DesignMatrix::from_differenced(&[], 1).unwrap_err();
        assert_eq!(err, ForecastError::InsufficientData { n: 0, min: 2 });
    }

    #[test]
    fn zero_lags_rejected() {
        let err = DesignMatrix::from_differenced(&[1.0, 2.0, 3.0], 0).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidParameter { name: "p", .. }));
    }
}
