//! Forecasting pipeline: difference, fit, recurse, reverse-difference.

use rayon::prelude::*;
use tracing::debug;

use crate::design::DesignMatrix;
use crate::difference::difference;
use crate::error::ForecastError;
use crate::fit::ArFit;
use crate::lstsq;
use crate::spec::ArimaSpec;

/// Fits an AR(p) model to the lag-`d` differenced series.
///
/// 1. Validate order and data
/// 2. Difference
/// 3. Build the lagged design matrix
/// 4. Solve least squares through the origin
/// 5. Keep residuals and the last `p` differences for forecasting
pub(crate) fn fit_ar(spec: ArimaSpec, series: &[f64]) -> Result<ArFit, ForecastError> {
    // 1. Validate
    check_series(&spec, series)?;
    if spec.q() > 0 {
        debug!(q = spec.q(), "moving-average order is not estimated");
    }

    // 2. Difference
    let p = spec.p();
    let differenced = difference(series, spec.d());

    // 3. Design matrix
    let design = DesignMatrix::from_differenced(&differenced, p)?;

    // 4. Least squares
    let solution = lstsq::solve_no_intercept(design.features(), design.target())?;

    // 5. Residuals and forecast seed
    let beta = ndarray::Array1::from(solution.coefficients.clone());
    let residuals: Vec<f64> = (design.target() - &design.features().dot(&beta)).to_vec();
    let sigma2 = residuals.iter().map(|r| r * r).sum::<f64>() / design.rows() as f64;
    let buffer = differenced[differenced.len() - p..].to_vec();

    debug!(
        p,
        d = spec.d(),
        rows = design.rows(),
        rank = solution.rank,
        sigma2,
        coefficients = ?solution.coefficients,
        "fitted AR model"
    );

    Ok(ArFit::new(
        spec,
        solution.coefficients,
        residuals,
        sigma2,
        solution.rank,
        buffer,
        series.to_vec(),
    ))
}

/// Checks the order and the data, in that order: `p`, finiteness, length.
///
/// Runs ahead of any horizon check so the error kind for a given series
/// does not depend on `steps`.
pub(crate) fn check_series(spec: &ArimaSpec, series: &[f64]) -> Result<(), ForecastError> {
    spec.validate()?;
    if series.iter().any(|x| !x.is_finite()) {
        return Err(ForecastError::NonFiniteData);
    }
    let min_len = spec.min_len();
    if series.len() < min_len {
        return Err(ForecastError::InsufficientData {
            n: series.len(),
            min: min_len,
        });
    }
    Ok(())
}

/// Forecasts `steps` values of `series` with an AR(`p`) model fitted on
/// its lag-`d` differences, using anchored reverse differencing.
///
/// `q` is accepted for ARIMA-style call sites and has no effect.
///
/// # Example
///
/// ```
/// let series = [100.0, 150.0, 200.0, 250.0, 300.0, 350.0, 400.0, 450.0];
/// let out = arcast_ar::forecast(&series, 1, 1, 1, 3).unwrap();
/// // diff forecast is 50 per step, anchored at series[5..8]
/// assert!((out[0] - 400.0).abs() < 1e-9);
/// assert!((out[2] - 500.0).abs() < 1e-9);
/// ```
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`ForecastError::InvalidParameter`] | `p == 0`, or `d > 0` and `steps > series.len()` |
/// | [`ForecastError::NonFiniteData`] | any element is NaN or infinite |
/// | [`ForecastError::InsufficientData`] | `series.len() < d + p + 1` |
/// | [`ForecastError::SingularModel`] | design matrix rank below `p` |
pub fn forecast(
    series: &[f64],
    p: usize,
    d: usize,
    q: usize,
    steps: usize,
) -> Result<Vec<f64>, ForecastError> {
    ArimaSpec::new(p, d, q).forecast(series, steps)
}

/// Fits many independent series in parallel with the same spec.
///
/// Results are returned in input order, one per series.
pub fn fit_batch(series: &[Vec<f64>], spec: &ArimaSpec) -> Vec<Result<ArFit, ForecastError>> {
    series.par_iter().map(|s| spec.fit(s)).collect()
}

/// Forecasts many independent series in parallel with the same spec.
///
/// Results are returned in input order, one per series. A failure on one
/// series does not affect the others.
pub fn forecast_batch(
    series: &[Vec<f64>],
    spec: &ArimaSpec,
    steps: usize,
) -> Vec<Result<Vec<f64>, ForecastError>> {
    series
        .par_iter()
        .map(|s| spec.forecast(s, steps))
        .collect()
}
