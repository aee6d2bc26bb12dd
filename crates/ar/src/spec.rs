//! Model specification (unfitted).

use crate::difference::check_anchored_horizon;
use crate::error::ForecastError;
use crate::fit::ArFit;

/// How a forecast made on differenced values is mapped back to the
/// scale of the original series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Reconstruction {
    /// `out[i] = diff[i] + series[n - steps + i]`.
    ///
    /// Each point is anchored to a fixed index of the observed series, so
    /// earlier forecast points never feed later ones. The horizon is
    /// limited to `steps <= n`.
    #[default]
    Anchored,
    /// `out[i] = diff[i] + out[i - d]`, seeded by the last `d` observations.
    ///
    /// Lag-`d` integration chained through the forecast itself. No
    /// horizon limit.
    Cumulative,
}

impl Reconstruction {
    /// Lower-case name, as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Reconstruction::Anchored => "anchored",
            Reconstruction::Cumulative => "cumulative",
        }
    }
}

/// An unfitted ARIMA(p,d,q) specification.
///
/// Only the AR part is estimated. `q` is kept so callers that think in
/// ARIMA orders can pass it through, but it has no effect on the fit or
/// the forecast.
///
/// # Typestate Workflow
///
/// ```mermaid
/// graph LR
///     A["ArimaSpec::new(p, d, q)"] -->|".fit(&series)?"| B["ArFit"]
///     B -->|".forecast(steps)?"| C["Vec&lt;f64&gt;"]
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArimaSpec {
    p: usize,
    d: usize,
    q: usize,
    reconstruction: Reconstruction,
}

impl ArimaSpec {
    /// Creates a specification with AR order `p`, differencing lag `d`
    /// and (unused) MA order `q`, using [`Reconstruction::Anchored`].
    ///
    /// # Example
    ///
    /// ```
    /// use arcast_ar::{ArimaSpec, Reconstruction};
    ///
    /// let spec = ArimaSpec::new(2, 1, 1);
    /// assert_eq!(spec.p(), 2);
    /// assert_eq!(spec.d(), 1);
    /// assert_eq!(spec.q(), 1);
    /// assert_eq!(spec.reconstruction(), Reconstruction::Anchored);
    /// ```
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self {
            p,
            d,
            q,
            reconstruction: Reconstruction::default(),
        }
    }

    /// Sets the reverse-differencing policy.
    pub fn with_reconstruction(mut self, reconstruction: Reconstruction) -> Self {
        self.reconstruction = reconstruction;
        self
    }

    /// Returns the AR order (`p`).
    pub fn p(&self) -> usize {
        self.p
    }

    /// Returns the differencing lag (`d`).
    pub fn d(&self) -> usize {
        self.d
    }

    /// Returns the MA order (`q`). Carried for interface compatibility only.
    pub fn q(&self) -> usize {
        self.q
    }

    /// Returns the reverse-differencing policy.
    pub fn reconstruction(&self) -> Reconstruction {
        self.reconstruction
    }

    /// Minimum series length that yields one regression row: `d + p + 1`.
    pub fn min_len(&self) -> usize {
        self.d + self.p + 1
    }

    /// Checks the order parameters.
    pub fn validate(&self) -> Result<(), ForecastError> {
        if self.p < 1 {
            return Err(ForecastError::InvalidParameter {
                name: "p",
                reason: "AR order must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Fits the AR(p) model to the lag-`d` differenced series.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ForecastError::InvalidParameter`] | `p == 0` |
    /// | [`ForecastError::NonFiniteData`] | any element is NaN or infinite |
    /// | [`ForecastError::InsufficientData`] | `series.len() < d + p + 1` |
    /// | [`ForecastError::SingularModel`] | design matrix rank below `p` |
    pub fn fit(&self, series: &[f64]) -> Result<ArFit, ForecastError> {
        crate::engine::fit_ar(*self, series)
    }

    /// Fits and forecasts `steps` values in the scale of `series`.
    ///
    /// Order and data are checked first, then the horizon, so an anchored
    /// forecast that cannot be reconstructed fails without running the
    /// solver while a too-short series is always `InsufficientData`.
    pub fn forecast(&self, series: &[f64], steps: usize) -> Result<Vec<f64>, ForecastError> {
        crate::engine::check_series(self, series)?;
        if self.reconstruction == Reconstruction::Anchored {
            check_anchored_horizon(series.len(), steps, self.d)?;
        }
        self.fit(series)?.forecast(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_round_trip() {
        let spec = ArimaSpec::new(3, 2, 1);
        assert_eq!(spec.p(), 3);
        assert_eq!(spec.d(), 2);
        assert_eq!(spec.q(), 1);
        assert_eq!(spec.min_len(), 6);
    }

    #[test]
    fn default_reconstruction_is_anchored() {
        assert_eq!(ArimaSpec::new(1, 1, 0).reconstruction(), Reconstruction::Anchored);
        let spec = ArimaSpec::new(1, 1, 0).with_reconstruction(Reconstruction::Cumulative);
        assert_eq!(spec.reconstruction(), Reconstruction::Cumulative);
    }

    #[test]
    fn reconstruction_names() {
        assert_eq!(Reconstruction::Anchored.as_str(), "anchored");
        assert_eq!(Reconstruction::Cumulative.as_str(), "cumulative");
    }

    #[test]
    fn spec_is_copy() {
        let a = ArimaSpec::new(1, 1, 1);
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn validate_rejects_zero_p() {
        let err = ArimaSpec::new(0, 1, 0).validate().unwrap_err();
        assert!(matches!(err, ForecastError::InvalidParameter { name: "p", .. }));
    }

    #[test]
    fn fit_rejects_zero_p() {
        let err = ArimaSpec::new(0, 1, 0).fit(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidParameter { name: "p", .. }));
    }

    #[test]
    fn fit_nan_data() {
        let err = ArimaSpec::new(1, 1, 0)
            .fit(&[1.0, f64::NAN, 3.0, 4.0])
            .unwrap_err();
        assert_eq!(err, ForecastError::NonFiniteData);
    }

    #[test]
    fn fit_insufficient_data() {
        let err = ArimaSpec::new(2, 1, 0).fit(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, ForecastError::InsufficientData { n: 3, min: 4 });
    }

    #[test]
    fn forecast_rejects_anchored_horizon_past_series() {
        let series = [1.0, 2.0, 4.0, 7.0, 11.0];
        let err = ArimaSpec::new(1, 1, 0).forecast(&series, 6).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidParameter { name: "steps", .. }));
    }

    #[test]
    fn cumulative_has_no_horizon_limit() {
        let series = [1.0, 2.0, 4.0, 7.0, 11.0];
        let out = ArimaSpec::new(1, 1, 0)
            .with_reconstruction(Reconstruction::Cumulative)
            .forecast(&series, 20)
            .unwrap();
        assert_eq!(out.len(), 20);
    }
}
