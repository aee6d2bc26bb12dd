//! Forecast output: JSON documents or long-format CSV.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::IoError;
use crate::plot::PlotDataset;

/// Fitted-model facts reported next to a forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub p: usize,
    pub d: usize,
    pub q: usize,
    /// `"anchored"` or `"cumulative"`.
    pub reconstruction: String,
    pub coefficients: Vec<f64>,
    pub sigma2: f64,
    /// `None` when the fit is exact (`sigma2 == 0`) and AIC is `-inf`.
    pub aic: Option<f64>,
    /// Regression rows used in the fit.
    pub n_obs: usize,
}

/// One forecast result for one input series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastOutput {
    /// Name of the input series.
    pub series: String,
    /// Absent when only the forecast was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelSummary>,
    pub steps: usize,
    pub forecast: Vec<f64>,
    pub plot: PlotDataset,
}

impl ForecastOutput {
    /// Builds an output record, deriving the plot dataset from `original`
    /// and `forecast`.
    pub fn new(
        series: impl Into<String>,
        original: &[f64],
        forecast: Vec<f64>,
        model: Option<ModelSummary>,
    ) -> Self {
        let plot = PlotDataset::new(original, &forecast);
        Self {
            series: series.into(),
            model,
            steps: forecast.len(),
            forecast,
            plot,
        }
    }
}

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    /// One row per plot point: `series,label,x,y`.
    Csv,
}

impl OutputFormat {
    /// `.csv` selects CSV; everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => OutputFormat::Csv,
            _ => OutputFormat::Json,
        }
    }
}

/// Serializes any value as pretty-printed JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, IoError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Writes any serializable value to `path` as pretty-printed JSON.
pub fn write_json_value<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), IoError> {
    let body = to_json(value)?;
    std::fs::write(path, body).map_err(|e| IoError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(path = %path.display(), "wrote JSON output");
    Ok(())
}

/// Writes outputs as a JSON array.
pub fn write_json(path: &Path, outputs: &[ForecastOutput]) -> Result<(), IoError> {
    write_json_value(path, outputs)
}

/// Writes the plot datasets of all outputs in long format.
///
/// The header is `series,label,x,y`. Original points come before forecast
/// points within each series.
pub fn write_csv(path: &Path, outputs: &[ForecastOutput]) -> Result<(), IoError> {
    let write_err = |reason: String| IoError::Write {
        path: path.to_path_buf(),
        reason,
    };
    let mut writer = csv::Writer::from_path(path).map_err(|e| write_err(e.to_string()))?;
    writer.write_record(["series", "label", "x", "y"])?;

    let mut rows = 0usize;
    for out in outputs {
        for s in out.plot.series() {
            for point in &s.points {
                let x = point.x.to_string();
                let y = point.y.to_string();
                writer.write_record([
                    out.series.as_str(),
                    s.label.as_str(),
                    x.as_str(),
                    y.as_str(),
                ])?;
                rows += 1;
            }
        }
    }
    writer.flush().map_err(|e| write_err(e.to_string()))?;
    info!(path = %path.display(), rows, "wrote CSV output");
    Ok(())
}

/// Writes outputs in the format implied by the path extension.
pub fn write_output(path: &Path, outputs: &[ForecastOutput]) -> Result<(), IoError> {
    match OutputFormat::from_path(path) {
        OutputFormat::Json => write_json(path, outputs),
        OutputFormat::Csv => write_csv(path, outputs),
    }
}
