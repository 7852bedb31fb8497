use anyhow::Result;
use clap::Parser;
use color_transparency::MainColorStrategy;
use std::path::PathBuf;

mod config;
mod processing;

/// Batch-convert the dominant color of images into a transparency gradient.
#[derive(Parser, Debug)]
#[command(name = "transparency-helper", version)]
pub struct Args {
    /// Directory containing the source images
    pub source_dir: PathBuf,

    /// Single image file (relative to the source directory) to transform;
    /// "all" or omitted transforms every supported image in the directory
    pub source_file: Option<String>,

    /// Run a single detection strategy instead of all four
    /// (most-used, second-most-used, most-different-from-most-used,
    /// different-and-well-used)
    #[arg(long)]
    pub strategy: Option<MainColorStrategy>,

    /// Skip detection and keep pure black over a white reference
    #[arg(long)]
    pub keep_black: bool,

    /// Optional TOML file with default settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Name of the output subdirectory created inside the source directory
    #[arg(long)]
    pub output_dir: Option<String>,
}

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = config::Config::resolve(&args)?;

    processing::run(&config)
}
