//! Fitted AR model results.

use crate::difference::{integrate, reverse_difference};
use crate::error::ForecastError;
use crate::spec::{ArimaSpec, Reconstruction};

/// A fitted AR(p) model produced by [`ArimaSpec::fit()`].
///
/// Holds the least-squares coefficients, in-sample residuals, the last
/// `p` differenced values that seed the recursive forecast, and the
/// observed series needed for reverse differencing.
///
/// # Typestate Workflow
///
/// ```mermaid
/// graph LR
///     B["ArFit"] --> C[".coefficients(): AR weights"]
///     B --> D[".sigma2(): residual variance"]
///     B --> E[".aic(): Akaike Information Criterion"]
///     B --> F[".forecast_differenced(steps)"]
///     B --> G[".forecast(steps)?"]
/// ```
#[derive(Clone, Debug)]
pub struct ArFit {
    spec: ArimaSpec,
    coefficients: Vec<f64>,
    residuals: Vec<f64>,
    sigma2: f64,
    rank: usize,
    buffer: Vec<f64>,
    series: Vec<f64>,
}

impl ArFit {
    /// Creates a new `ArFit` (crate-internal constructor).
    ///
    /// `buffer` must hold exactly `coefficients.len()` values.
    pub(crate) fn new(
        spec: ArimaSpec,
        coefficients: Vec<f64>,
        residuals: Vec<f64>,
        sigma2: f64,
        rank: usize,
        buffer: Vec<f64>,
        series: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(coefficients.len(), buffer.len());
        Self {
            spec,
            coefficients,
            residuals,
            sigma2,
            rank,
            buffer,
            series,
        }
    }

    /// Returns the [`ArimaSpec`] that produced this fit.
    pub fn spec(&self) -> ArimaSpec {
        self.spec
    }

    /// Returns the `(p, d, q)` order of the fitted model.
    pub fn order(&self) -> (usize, usize, usize) {
        (self.spec.p(), self.spec.d(), self.spec.q())
    }

    /// Returns the AR coefficients, `coefficients()[j]` weighting lag `j + 1`.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the in-sample residuals `y - X·β`, one per regression row.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Returns the residual variance `RSS / rows`.
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// Returns the numerical rank of the design matrix (always `p`).
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Returns the number of regression rows used in the fit.
    pub fn n_obs(&self) -> usize {
        self.residuals.len()
    }

    /// Returns the last `p` differenced values, oldest first.
    pub fn last_values(&self) -> &[f64] {
        &self.buffer
    }

    /// Gaussian conditional log-likelihood of the residuals.
    ///
    /// `-n/2 · (ln(2π·sigma2) + 1)`. A perfect fit (`sigma2 == 0`) gives
    /// `+inf`.
    pub fn log_likelihood(&self) -> f64 {
        let n = self.n_obs() as f64;
        -0.5 * n * ((2.0 * std::f64::consts::PI * self.sigma2).ln() + 1.0)
    }

    /// Computes the Akaike Information Criterion for this fit.
    ///
    /// AIC = 2k - 2 * log_likelihood, where k = p + 1 (AR coefficients
    /// plus the residual variance).
    pub fn aic(&self) -> f64 {
        let k = (self.spec.p() + 1) as f64;
        2.0 * k - 2.0 * self.log_likelihood()
    }

    /// Runs the recursive forecast in differenced space.
    ///
    /// Each step computes `next = Σ_j β[j] · window[p - j - 1]`, matching
    /// the column order of the design matrix, then rolls the window left
    /// and stores `next` in its last slot.
    pub fn forecast_differenced(&self, steps: usize) -> Vec<f64> {
        let p = self.coefficients.len();
        let mut window = self.buffer.clone();
        let mut out = Vec::with_capacity(steps);

        for _ in 0..steps {
            let next: f64 = self
                .coefficients
                .iter()
                .enumerate()
                .map(|(j, beta)| beta * window[p - j - 1])
                .sum();
            out.push(next);

            window.rotate_left(1);
            window[p - 1] = next;
        }

        out
    }

    /// Forecasts `steps` values in the scale of the observed series.
    ///
    /// # Errors
    ///
    /// [`ForecastError::InvalidParameter`] when the model uses
    /// [`Reconstruction::Anchored`], `d > 0` and `steps` exceeds the length
    /// of the observed series.
    pub fn forecast(&self, steps: usize) -> Result<Vec<f64>, ForecastError> {
        let d = self.spec.d();
        if self.spec.reconstruction() == Reconstruction::Anchored {
            crate::difference::check_anchored_horizon(self.series.len(), steps, d)?;
        }

        let diff = self.forecast_differenced(steps);
        match self.spec.reconstruction() {
            Reconstruction::Anchored => reverse_difference(&self.series, &diff, d),
            Reconstruction::Cumulative => integrate(&self.series, &diff, d),
        }
    }
}
