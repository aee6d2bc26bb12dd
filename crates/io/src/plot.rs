//! Plot dataset for the original series and its forecast.
//!
//! Nothing is rendered here. The dataset is what a chart front end
//! consumes: two labeled line series on one time axis, with the forecast
//! continuing right after the last observation.

use serde::Serialize;

/// Label of the observed series.
pub const ORIGINAL_LABEL: &str = "Original";

/// Label of the forecast series.
pub const FORECAST_LABEL: &str = "Forecast";

/// One point on the shared, 1-based time axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    pub x: usize,
    pub y: f64,
}

/// A labeled line series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSeries {
    pub label: String,
    pub points: Vec<PlotPoint>,
}

impl PlotSeries {
    fn starting_at(label: &str, first_x: usize, values: &[f64]) -> Self {
        Self {
            label: label.to_string(),
            points: values
                .iter()
                .enumerate()
                .map(|(i, &y)| PlotPoint { x: first_x + i, y })
                .collect(),
        }
    }
}

/// Original series at `x = 1..=n`, forecast at `x = n+1..=n+steps`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotDataset {
    pub original: PlotSeries,
    pub forecast: PlotSeries,
}

impl PlotDataset {
    /// Builds the dataset from an observed series and its forecast.
    ///
    /// # Example
    ///
    /// ```
    /// use arcast_io::PlotDataset;
    ///
    /// let ds = PlotDataset::new(&[1.0, 2.0, 3.0], &[4.0, 5.0]);
    /// assert_eq!(ds.original.points[0].x, 1);
    /// assert_eq!(ds.forecast.points[0].x, 4);
    /// ```
    pub fn new(original: &[f64], forecast: &[f64]) -> Self {
        Self {
            original: PlotSeries::starting_at(ORIGINAL_LABEL, 1, original),
            forecast: PlotSeries::starting_at(FORECAST_LABEL, original.len() + 1, forecast),
        }
    }

    /// Both series, original first.
    pub fn series(&self) -> [&PlotSeries; 2] {
        [&self.original, &self.forecast]
    }
}
