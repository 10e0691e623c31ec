use clap::Parser;
use std::path::PathBuf;

/// Terminal client for the workplace depression risk predictor
#[derive(Parser, Debug)]
#[command(name = "mindcheck", version, about)]
pub struct Cli {
    /// Prediction endpoint URL (overrides the config file)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Path to an alternative config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Color theme: mocha or latte (overrides the config file)
    #[arg(long)]
    pub theme: Option<String>,
}
