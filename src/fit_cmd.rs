//! Fit command: report coefficients and fit diagnostics without forecasting.

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use tracing::{info, info_span};

use arcast_ar::fit_batch;
use arcast_io::{ModelSummary, read_columns, to_json, write_json_value};

use crate::cli::FitArgs;
use crate::config::ArcastConfig;
use crate::convert;

/// Diagnostics for one fitted series.
#[derive(Debug, Serialize)]
struct FitReport {
    series: String,
    model: ModelSummary,
    rank: usize,
    /// `None` for an exact fit, where it is `+inf`.
    log_likelihood: Option<f64>,
    residuals: Vec<f64>,
}

/// Fit every selected series and report the results as JSON.
pub fn run(args: FitArgs) -> Result<()> {
    let _cmd = info_span!("fit").entered();

    // 1. Load config and merge CLI flags
    let mut config = ArcastConfig::load(args.model.config.as_deref())?;
    convert::apply_overrides(&mut config, &args.model);

    // 2. Build library configs
    let spec = convert::build_spec(&config.model)?;
    let reader_cfg = convert::build_reader_config(&config.io)?;
    let input = config
        .io
        .input
        .as_ref()
        .ok_or_else(|| anyhow!("no input path: set [io].input in config or use --input"))?;

    // 3. Read and fit
    let series = read_columns(input, &reader_cfg)
        .with_context(|| format!("failed to read series: {}", input.display()))?;
    let values: Vec<Vec<f64>> = series.iter().map(|s| s.values.clone()).collect();

    let mut reports = Vec::with_capacity(series.len());
    for (s, fit) in series.iter().zip(fit_batch(&values, &spec)) {
        let fit = fit.with_context(|| format!("failed to fit series '{}'", s.name))?;
        info!(
            series = %s.name,
            coefficients = ?fit.coefficients(),
            sigma2 = fit.sigma2(),
            aic = fit.aic(),
            "model fitted"
        );
        reports.push(FitReport {
            series: s.name.clone(),
            model: convert::model_summary(&fit),
            rank: fit.rank(),
            log_likelihood: convert::finite(fit.log_likelihood()),
            residuals: fit.residuals().to_vec(),
        });
    }

    // 4. Write or print
    match config.io.output {
        Some(ref path) => write_json_value(path, &reports)
            .with_context(|| format!("failed to write output: {}", path.display()))?,
        None => println!("{}", to_json(&reports)?),
    }
    Ok(())
}
