//! Rank-revealing least squares through the origin.
//!
//! Solves `y ≈ X·β` with an SVD of `X`. Columns whose singular values
//! fall below `max(rows, cols) · eps · s_max` count as dependent; any
//! such column makes the fit singular rather than silently regularised.
//!
//! **Not part of the public API.**

use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2};
use tracing::trace;

use crate::error::ForecastError;

/// Coefficients and numerical rank of a least-squares solve.
#[derive(Clone, Debug)]
pub(crate) struct LstsqSolution {
    pub(crate) coefficients: Vec<f64>,
    pub(crate) rank: usize,
}

/// Minimises `||y - X·β||²` with no intercept column.
///
/// Fails with [`ForecastError::SingularModel`] when `X` has rank below
/// its column count.
pub(crate) fn solve_no_intercept(
    x: &Array2<f64>,
    y: &Array1<f64>,
) -> Result<LstsqSolution, ForecastError> {
    let (rows, cols) = x.dim();
    let a = DMatrix::from_fn(rows, cols, |i, j| x[[i, j]]);
    let b = DVector::from_iterator(rows, y.iter().copied());

    let svd = a.svd(true, true);
    let s_max = svd.singular_values.iter().copied().fold(0.0_f64, f64::max);
    let tol = s_max * rows.max(cols) as f64 * f64::EPSILON;
    let rank = svd.singular_values.iter().filter(|&&s| s > tol).count();
    trace!(rows, cols, rank, s_max, tol, "svd of design matrix");

    if rank < cols {
        return Err(ForecastError::SingularModel { rank, p: cols });
    }

    let beta = svd
        .solve(&b, tol)
        .map_err(|_| ForecastError::SingularModel { rank, p: cols })?;

    Ok(LstsqSolution {
        coefficients: beta.iter().copied().collect(),
        rank,
    })
}
