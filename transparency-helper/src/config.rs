//! Runtime configuration: TOML file defaults overridden by CLI arguments.

use crate::Args;
use anyhow::{Context, Result};
use color_transparency::MainColorStrategy;
use derivative::Derivative;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Settings a TOML file may provide. Anything absent falls back to the
/// defaults below; CLI arguments override both.
#[derive(Deserialize, Derivative, Debug, Clone)]
#[derivative(Default)]
#[serde(default)]
pub struct FileConfig {
    /// Name of the output subdirectory inside the source directory.
    #[derivative(Default(value = "\"fixed-transparency\".to_string()"))]
    pub output_dir: String,

    /// Strategy names to run; empty means all four.
    pub strategies: Vec<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| path.display().to_string())?;
        toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }
}

/// Fully resolved settings for one batch run.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_dir: PathBuf,

    /// `None` or `"all"` (case-insensitive) selects every supported image.
    pub source_file: Option<String>,

    pub output_dir: String,

    pub strategies: Vec<MainColorStrategy>,

    pub keep_black: bool,
}

impl Config {
    pub fn resolve(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let strategies = if let Some(strategy) = args.strategy {
            vec![strategy]
        } else if !file.strategies.is_empty() {
            file.strategies
                .iter()
                .map(|name| name.parse::<MainColorStrategy>())
                .collect::<color_transparency::Result<Vec<_>>>()?
        } else {
            MainColorStrategy::ALL.to_vec()
        };

        Ok(Self {
            source_dir: args.source_dir.clone(),
            source_file: args.source_file.clone(),
            output_dir: args.output_dir.clone().unwrap_or(file.output_dir),
            strategies,
            keep_black: args.keep_black,
        })
    }
}
