//! Pure conversion functions: TOML config structs and CLI flags -> crate API types.

use anyhow::{Result, bail};

use crate::cli::ModelArgs;
use crate::config::*;

use arcast_ar::{ArFit, ArimaSpec, Reconstruction};
use arcast_io::{ModelSummary, ReaderConfig, SeriesFormat};

/// Parses a reconstruction policy name into the corresponding enum variant.
pub fn parse_reconstruction(s: &str) -> Result<Reconstruction> {
    match s.to_lowercase().as_str() {
        "anchored" => Ok(Reconstruction::Anchored),
        "cumulative" => Ok(Reconstruction::Cumulative),
        other => bail!("unknown reconstruction: {other:?}"),
    }
}

/// Parses an input format name into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<SeriesFormat> {
    match s.to_lowercase().as_str() {
        "auto" => Ok(SeriesFormat::Auto),
        "csv" => Ok(SeriesFormat::Csv),
        "json" => Ok(SeriesFormat::Json),
        "text" | "txt" => Ok(SeriesFormat::Text),
        other => bail!("unknown input format: {other:?}"),
    }
}

/// Applies CLI flags on top of the loaded configuration.
pub fn apply_overrides(config: &mut ArcastConfig, args: &ModelArgs) {
    if let Some(p) = args.p {
        config.model.p = p;
    }
    if let Some(d) = args.d {
        config.model.d = d;
    }
    if let Some(q) = args.q {
        config.model.q = q;
    }
    if let Some(ref input) = args.input {
        config.io.input = Some(input.clone());
    }
    if !args.columns.is_empty() {
        config.io.columns = args.columns.clone();
    }
    if let Some(ref format) = args.format {
        config.io.format = format.clone();
    }
    if let Some(ref output) = args.output {
        config.io.output = Some(output.clone());
    }
}

/// Builds an [`ArimaSpec`] from the TOML model section.
///
/// Order validation is left to the engine so its error names the parameter.
pub fn build_spec(model: &ModelToml) -> Result<ArimaSpec> {
    let reconstruction = parse_reconstruction(&model.reconstruction)?;
    Ok(ArimaSpec::new(model.p, model.d, model.q).with_reconstruction(reconstruction))
}

/// Builds a [`ReaderConfig`] from the TOML I/O section.
pub fn build_reader_config(io: &IoToml) -> Result<ReaderConfig> {
    let format = parse_format(&io.format)?;
    Ok(ReaderConfig::default()
        .with_format(format)
        .with_columns(io.columns.iter().cloned()))
}

/// Summarizes a fitted model for output.
pub fn model_summary(fit: &ArFit) -> ModelSummary {
    let (p, d, q) = fit.order();
    ModelSummary {
        p,
        d,
        q,
        reconstruction: fit.spec().reconstruction().as_str().to_string(),
        coefficients: fit.coefficients().to_vec(),
        sigma2: fit.sigma2(),
        aic: finite(fit.aic()),
        n_obs: fit.n_obs(),
    }
}

/// Drops `±inf` and NaN so JSON output shows `null` by intent.
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
