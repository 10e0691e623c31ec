use anyhow::Result;
use clap::Parser;
use log::{debug, info};

use mindcheck::cli::Cli;
use mindcheck::config::Config;
use mindcheck::tui;
use mindcheck::tui::apps::SurveyApp;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger to file (truncate on each run); the terminal
    // belongs to the TUI, so nothing may be written to stdout.
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("mindcheck.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting mindcheck");

    let config = Config::load(cli.config.as_deref())?.with_overrides(&cli)?;
    info!("Prediction endpoint: {}", config.endpoint);
    debug!(
        "submit_delay_ms={} toast_duration_ms={} request_timeout_secs={}",
        config.submit_delay_ms, config.toast_duration_ms, config.request_timeout_secs
    );
    mindcheck::init_config(config)?;

    tui::run::<SurveyApp>().await
}
