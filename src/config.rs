use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level arcast configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArcastConfig {
    /// Model orders and forecast horizon.
    #[serde(default)]
    pub model: ModelToml,

    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,
}

impl ArcastConfig {
    /// Reads and parses a TOML config file, or returns defaults when no
    /// path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    #[serde(default = "default_p")]
    pub p: usize,
    #[serde(default = "default_d")]
    pub d: usize,
    #[serde(default = "default_q")]
    pub q: usize,
    #[serde(default = "default_steps")]
    pub steps: usize,
    #[serde(default = "default_reconstruction")]
    pub reconstruction: String,
}

impl Default for ModelToml {
    fn default() -> Self {
        Self {
            p: default_p(),
            d: default_d(),
            q: default_q(),
            steps: default_steps(),
            reconstruction: default_reconstruction(),
        }
    }
}

fn default_p() -> usize {
    1
}
fn default_d() -> usize {
    1
}
fn default_q() -> usize {
    1
}
fn default_steps() -> usize {
    12
}
fn default_reconstruction() -> String {
    "anchored".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default = "default_format")]
    pub format: String,
    pub output: Option<PathBuf>,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            columns: Vec::new(),
            format: default_format(),
            output: None,
        }
    }
}

fn default_format() -> String {
    "auto".to_string()
}
