use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// arcast: AR(p) forecasting on lag-differenced series.
#[derive(Parser)]
#[command(
    name = "arcast",
    version,
    about = "Autoregressive forecasting on lag-differenced series"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Fit and forecast every selected series.
    Forecast(ForecastArgs),
    /// Fit only and report coefficients and diagnostics.
    Fit(FitArgs),
}

/// Model and input options shared by all subcommands.
///
/// Every flag overrides the matching value from the config file.
#[derive(clap::Args)]
pub struct ModelArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Input series file (CSV, JSON or plain text).
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Column to read, by name or 0-based index. Repeat for several series.
    #[arg(long = "column")]
    pub columns: Vec<String>,

    /// Input format: auto, csv, json or text.
    #[arg(long)]
    pub format: Option<String>,

    /// Autoregressive order.
    #[arg(short)]
    pub p: Option<usize>,

    /// Differencing lag.
    #[arg(short)]
    pub d: Option<usize>,

    /// Moving-average order (accepted, not estimated).
    #[arg(short)]
    pub q: Option<usize>,

    /// Output path (.json or .csv). Prints JSON to stdout when absent.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Number of values to forecast.
    #[arg(short, long)]
    pub steps: Option<usize>,

    /// Reverse-differencing policy: anchored or cumulative.
    #[arg(short, long)]
    pub reconstruction: Option<String>,
}

/// Arguments for the `fit` subcommand.
#[derive(clap::Args)]
pub struct FitArgs {
    #[command(flatten)]
    pub model: ModelArgs,
}
