//! Error types for the arcast-ar crate.

/// Error type for all fallible operations in the arcast-ar crate.
///
/// Parameter problems, short inputs and numerical failures are separate
/// variants so callers can tell them apart. None of them is retryable:
/// the pipeline is deterministic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForecastError {
    /// Returned when an order or horizon parameter is out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Returned when the series is too short to form a single regression row.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required (`d + p + 1`).
        min: usize,
    },

    /// Returned when the lagged design matrix is rank-deficient.
    #[error("singular model: design matrix has rank {rank}, need {p}")]
    SingularModel {
        /// Numerical rank of the design matrix.
        rank: usize,
        /// AR order, i.e. the number of columns.
        p: usize,
    },

    /// Returned when the input series contains NaN or infinite values.
    #[error("input data contains non-finite values")]
    NonFiniteData,
}
