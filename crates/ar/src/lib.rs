//! # arcast-ar
//!
//! Autoregressive AR(p) forecasting on a lag-differenced series, with
//! coefficients estimated by a single no-intercept least-squares fit.
//!
//! ## Typestate Workflow
//!
//! ```mermaid
//! graph LR
//!     A["ArimaSpec::new(p, d, q)"] -->|".fit(&series)?"| B["ArFit"]
//!     B --> C[".coefficients(): AR weights"]
//!     B --> D[".residuals() / .sigma2()"]
//!     B --> E[".aic(): Akaike Information Criterion"]
//!     B --> F[".forecast(steps)?"]
//!     G["forecast(&series, p, d, q, steps)?"] -->|"one shot"| F
//! ```
//!
//! ## Pipeline
//!
//! 1. [`difference`]: `diff[i] = series[i + d] - series[i]`, a single
//!    subtraction spanning `d` lags (not `d` iterated first differences).
//! 2. [`DesignMatrix`]: `p` lagged values per row, most recent lag first.
//! 3. Least squares through the origin (SVD, rank-checked).
//! 4. Recursive forecast over a rolling window of the last `p` differences.
//! 5. Reverse differencing, see [`Reconstruction`].
//!
//! ## Two Usage Paths
//!
//! **One shot**:
//! ```
//! let series = [100.0, 150.0, 200.0, 250.0, 300.0, 350.0];
//! let out = arcast_ar::forecast(&series, 1, 1, 0, 2).unwrap();
//! assert_eq!(out.len(), 2);
//! ```
//!
//! **Fit, inspect, forecast**:
//! ```ignore
//! let fit = ArimaSpec::new(2, 1, 0).fit(&series)?;
//! println!("phi = {:?}, sigma2 = {}", fit.coefficients(), fit.sigma2());
//! let out = fit.forecast(12)?;
//! ```
//!
//! ## Known deviations from textbook ARIMA
//!
//! | Aspect | Behaviour here |
//! |--------|----------------|
//! | differencing, `d > 1` | one lag-`d` subtraction, not `d` first differences |
//! | `d = 0` | identity transform in both directions |
//! | reverse differencing | [`Reconstruction::Anchored`] by default |
//! | intercept | none, the fit is forced through the origin |
//! | MA order `q` | accepted, has no effect on the estimate |

mod design;
mod difference;
mod engine;
mod error;
mod fit;
mod lstsq;
mod spec;

pub use design::DesignMatrix;
pub use difference::{difference, integrate, reverse_difference};
pub use engine::{fit_batch, forecast, forecast_batch};
pub use error::ForecastError;
pub use fit::ArFit;
pub use spec::{ArimaSpec, Reconstruction};
