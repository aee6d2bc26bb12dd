//! # arcast-io
//!
//! Read univariate series from CSV, JSON or plain-text files and write
//! forecasts plus the two-series plot dataset as JSON or CSV. Bridges
//! external file formats into the `&[f64]` slices `arcast-ar` works on.

mod error;
mod plot;
mod reader;
mod writer;

pub use error::IoError;
pub use plot::{FORECAST_LABEL, ORIGINAL_LABEL, PlotDataset, PlotPoint, PlotSeries};
pub use reader::{NamedSeries, ReaderConfig, SeriesFormat, read_columns, read_series};
pub use writer::{
    ForecastOutput, ModelSummary, OutputFormat, to_json, write_csv, write_json, write_json_value,
    write_output,
};
