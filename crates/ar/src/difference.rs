//! Lag-`d` differencing and its two inverses.

use crate::error::ForecastError;

/// Returns `diff[i] = series[i + d] - series[i]`, of length `len - d`.
///
/// This is one subtraction spanning `d` lags. For `d > 1` it is **not**
/// the `d`-fold iterated first difference of textbook ARIMA. A lag of
/// zero leaves the series untouched. A series no longer than `d` yields
/// an empty vector.
///
/// # Example
///
/// ```
/// use arcast_ar::difference;
///
/// assert_eq!(difference(&[1.0, 2.0, 4.0, 8.0, 16.0], 2), vec![3.0, 6.0, 12.0]);
/// assert_eq!(difference(&[1.0, 2.0, 4.0], 0), vec![1.0, 2.0, 4.0]);
/// ```
pub fn difference(series: &[f64], d: usize) -> Vec<f64> {
    if d == 0 {
        return series.to_vec();
    }
    if series.len() <= d {
        return Vec::new();
    }
    series
        .iter()
        .zip(&series[d..])
        .map(|(lo, hi)| hi - lo)
        .collect()
}

/// Maps a differenced forecast back to the original scale by anchoring
/// every point to a fixed index of the observed series:
///
/// ```text
/// out[i] = forecast_diff[i] + original[original.len() - forecast_diff.len() + i]
/// ```
///
/// Reconstructed points do not chain off each other, so for multi-step
/// horizons no correction from earlier forecast points accumulates. With
/// `d = 0` the forecast is returned unchanged.
///
/// # Errors
///
/// [`ForecastError::InvalidParameter`] if `forecast_diff` is longer than
/// `original` (the anchor index would fall before the first observation).
pub fn reverse_difference(
    original: &[f64],
    forecast_diff: &[f64],
    d: usize,
) -> Result<Vec<f64>, ForecastError> {
    if d == 0 {
        return Ok(forecast_diff.to_vec());
    }
    check_anchored_horizon(original.len(), forecast_diff.len(), d)?;
    let anchors = &original[original.len() - forecast_diff.len()..];
    Ok(forecast_diff
        .iter()
        .zip(anchors)
        .map(|(diff, anchor)| diff + anchor)
        .collect())
}

/// Lag-`d` integration: the exact inverse of [`difference`].
///
/// `out[i] = diffs[i] + (i < d ? head[head.len() - d + i] : out[i - d])`.
/// Only the last `d` values of `head` are read. Feeding the first `d`
/// values of a series and its differences returns the rest of the series.
///
/// # Example
///
/// ```
/// use arcast_ar::{difference, integrate};
///
/// let s = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0];
/// let rest = integrate(&s[..2], &difference(&s, 2), 2).unwrap();
/// assert_eq!(rest, s[2..].to_vec());
/// ```
///
/// # Errors
///
/// [`ForecastError::InsufficientData`] if `head` holds fewer than `d` values.
pub fn integrate(head: &[f64], diffs: &[f64], d: usize) -> Result<Vec<f64>, ForecastError> {
    if d == 0 {
        return Ok(diffs.to_vec());
    }
    if head.len() < d {
        return Err(ForecastError::InsufficientData {
            n: head.len(),
            min: d,
        });
    }
    let seed = &head[head.len() - d..];
    let mut out: Vec<f64> = Vec::with_capacity(diffs.len());
    for (i, diff) in diffs.iter().enumerate() {
        let base = if i < d { seed[i] } else { out[i - d] };
        out.push(diff + base);
    }
    Ok(out)
}

/// Anchored reconstruction can address at most `n` points back.
pub(crate) fn check_anchored_horizon(n: usize, steps: usize, d: usize) -> Result<(), ForecastError> {
    if d > 0 && steps > n {
        return Err(ForecastError::InvalidParameter {
            name: "steps",
            reason: format!(
                "anchored reconstruction needs steps <= series length ({n}), got {steps}"
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn first_difference() {
        assert_eq!(difference(&[1.0, 3.0, 6.0, 10.0], 1), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn wide_lag_is_single_subtraction() {
        let s = [1.0, 2.0, 4.0, 8.0, 16.0];
        // One lag-2 subtraction, not two first differences ([1, 2, 4]).
        assert_eq!(difference(&s, 2), vec![3.0, 6.0, 12.0]);
    }

    #[test]
    fn zero_lag_is_identity() {
        let s = [5.0, -1.0, 2.5];
        assert_eq!(difference(&s, 0), s.to_vec());
        assert_eq!(reverse_difference(&s, &[7.0, 8.0], 0).unwrap(), vec![7.0, 8.0]);
        assert_eq!(integrate(&[], &[7.0, 8.0], 0).unwrap(), vec![7.0, 8.0]);
    }

    #[test]
    fn lag_not_shorter_than_series_is_empty() {
        assert!(difference(&[1.0, 2.0], 2).is_empty());
        assert!(difference(&[1.0], 3).is_empty());
        assert!(difference(&[], 1).is_empty());
    }

    #[test]
    fn anchored_reverse_uses_tail_of_original() {
        let original = [10.0, 20.0, 30.0, 40.0, 50.0];
        // anchors are original[5 - 3 + i] = 30, 40, 50
        let out = reverse_difference(&original, &[1.0, 2.0, 3.0], 1).unwrap();
        assert_eq!(out, vec![31.0, 42.0, 53.0]);
    }

    #[test]
    fn anchored_reverse_full_length() {
        let original = [10.0, 20.0, 30.0];
        let out = reverse_difference(&original, &[1.0, 1.0, 1.0], 2).unwrap();
        assert_eq!(out, vec![11.0, 21.0, 31.0]);
    }

    #[test]
    fn anchored_reverse_rejects_long_horizon() {
        let err = reverse_difference(&[1.0, 2.0], &[0.0, 0.0, 0.0], 1).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidParameter { name: "steps", .. }));
    }

    #[test]
    fn anchored_reverse_of_own_differences() {
        // Feeding difference(S, d) back in anchors each value at S[i + d],
        // giving S[i + d] + (S[i + d] - S[i]).
        let s = [2.0, 3.0, 5.0, 8.0, 13.0, 21.0];
        let d = 2;
        let diff = difference(&s, d);
        let out = reverse_difference(&s, &diff, d).unwrap();
        for (i, v) in out.iter().enumerate() {
            assert_abs_diff_eq!(*v, 2.0 * s[i + d] - s[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn integrate_inverts_difference() {
        let s = [1.5, -2.0, 3.25, 4.0, -0.5, 6.0, 7.75];
        for d in 1..=3 {
            let rest = integrate(&s[..d], &difference(&s, d), d).unwrap();
            let mut rebuilt = s[..d].to_vec();
            rebuilt.extend(rest);
            assert_eq!(rebuilt.len(), s.len());
            for (a, b) in rebuilt.iter().zip(&s) {
                assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn integrate_chains_past_seed() {
        // Continuing 1, 2, 3 with steps of one.
        let out = integrate(&[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0], 1).unwrap();
        assert_eq!(out, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn integrate_needs_d_seed_values() {
        let err = integrate(&[1.0], &[1.0], 2).unwrap_err();
        assert_eq!(err, ForecastError::InsufficientData { n: 1, min: 2 });
    }
}
