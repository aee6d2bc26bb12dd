//! Forecast command: read series, fit, forecast and write the results.

use anyhow::{Context, Result, anyhow};
use tracing::{debug_span, info, info_span};

use arcast_ar::fit_batch;
use arcast_io::{ForecastOutput, read_columns, to_json, write_output};

use crate::cli::ForecastArgs;
use crate::config::ArcastConfig;
use crate::convert;

/// Run the forecasting pipeline.
pub fn run(args: ForecastArgs) -> Result<()> {
    let _cmd = info_span!("forecast").entered();

    // 1. Load config and merge CLI flags
    let mut config = ArcastConfig::load(args.model.config.as_deref())?;
    convert::apply_overrides(&mut config, &args.model);
    if let Some(steps) = args.steps {
        config.model.steps = steps;
    }
    if let Some(reconstruction) = args.reconstruction {
        config.model.reconstruction = reconstruction;
    }

    // 2. Build library configs
    let spec = convert::build_spec(&config.model)?;
    let reader_cfg = convert::build_reader_config(&config.io)?;
    let steps = config.model.steps;
    let input = config
        .io
        .input
        .as_ref()
        .ok_or_else(|| anyhow!("no input path: set [io].input in config or use --input"))?;

    // 3. Read series
    info!(path = %input.display(), "reading series");
    let series = read_columns(input, &reader_cfg)
        .with_context(|| format!("failed to read series: {}", input.display()))?;
    info!(n_series = series.len(), "series loaded");

    // 4. Fit every series in parallel
    let values: Vec<Vec<f64>> = series.iter().map(|s| s.values.clone()).collect();
    let fits = fit_batch(&values, &spec);
    info!(
        p = spec.p(),
        d = spec.d(),
        q = spec.q(),
        reconstruction = spec.reconstruction().as_str(),
        "models fitted"
    );

    // 5. Forecast and assemble outputs
    let mut outputs = Vec::with_capacity(series.len());
    for (s, fit) in series.iter().zip(fits) {
        let _series = debug_span!("series", name = %s.name).entered();
        let fit = fit.with_context(|| format!("failed to fit series '{}'", s.name))?;
        let forecast = fit
            .forecast(steps)
            .with_context(|| format!("failed to forecast series '{}'", s.name))?;
        info!(
            series = %s.name,
            n = s.len(),
            steps,
            sigma2 = fit.sigma2(),
            last = ?forecast.last(),
            "forecast complete"
        );
        outputs.push(ForecastOutput::new(
            s.name.as_str(),
            &s.values,
            forecast,
            Some(convert::model_summary(&fit)),
        ));
    }

    // 6. Write or print
    match config.io.output {
        Some(ref path) => write_output(path, &outputs)
            .with_context(|| format!("failed to write output: {}", path.display()))?,
        None => println!("{}", to_json(&outputs)?),
    }
    Ok(())
}
