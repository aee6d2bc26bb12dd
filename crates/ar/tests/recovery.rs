//! Coefficient recovery on simulated autoregressive data.

use arcast_ar::{ArimaSpec, forecast_batch};
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

fn generate_ar(phi: &[f64], sigma2: f64, n: usize, seed: u64) -> Vec<f64> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, sigma2.sqrt()).unwrap();
    let mut data = vec![0.0; n];
    for t in 0..n {
        let mut val = normal.sample(&mut rng);
        for (i, coef) in phi.iter().enumerate() {
            if t > i {
                val += coef * data[t - 1 - i];
            }
        }
        data[t] = val;
    }
    data
}

fn cumulate(increments: &[f64], start: f64) -> Vec<f64> {
    let mut level = start;
    let mut out = Vec::with_capacity(increments.len() + 1);
    out.push(level);
    for inc in increments {
        level += inc;
        out.push(level);
    }
    out
}

#[test]
fn ar1_recovery_on_levels() {
    let phi = 0.7;
    let data = generate_ar(&[phi], 1.0, 2000, 100);
    let fit = ArimaSpec::new(1, 0, 0).fit(&data).unwrap();
    assert!(
        (fit.coefficients()[0] - phi).abs() < 0.1,
        "AR(1) phi: expected ~{}, got {}",
        phi,
        fit.coefficients()[0]
    );
    assert!(fit.sigma2() > 0.8 && fit.sigma2() < 1.2);
}

#[test]
fn ar2_recovery_on_levels() {
    let phi = [0.5, -0.3];
    let data = generate_ar(&phi, 1.0, 3000, 200);
    let fit = ArimaSpec::new(2, 0, 0).fit(&data).unwrap();
    for (got, want) in fit.coefficients().iter().zip(phi) {
        assert!(
            (got - want).abs() < 0.1,
            "AR(2) coefficient: expected ~{}, got {}",
            want,
            got
        );
    }
}

#[test]
fn ar1_recovery_on_integrated_series() {
    let phi = 0.6;
    let increments = generate_ar(&[phi], 1.0, 2000, 300);
    let levels = cumulate(&increments, 500.0);
    let fit = ArimaSpec::new(1, 1, 0).fit(&levels).unwrap();
    assert!(
        (fit.coefficients()[0] - phi).abs() < 0.1,
        "ARI(1,1) phi: expected ~{}, got {}",
        phi,
        fit.coefficients()[0]
    );
    assert!(fit.aic().is_finite());
}

#[test]
fn batch_of_simulated_series() {
    let series: Vec<Vec<f64>> = (0..8)
        .map(|seed| cumulate(&generate_ar(&[0.4], 1.0, 300, seed), 100.0))
        .collect();
    let spec = ArimaSpec::new(1, 1, 0);
    let results = forecast_batch(&series, &spec, 12);
    assert_eq!(results.len(), series.len());
    for (s, result) in series.iter().zip(&results) {
        let out = result.as_ref().unwrap();
        assert_eq!(out.len(), 12);
        assert!(out.iter().all(|v| v.is_finite()));
        assert_eq!(out, &spec.forecast(s, 12).unwrap());
    }
}
