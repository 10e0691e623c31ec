use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Cli;
use crate::tui::ThemeVariant;

/// Application configuration, loaded from a TOML file with CLI overrides.
///
/// Missing file means defaults; a malformed file is a startup error.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Prediction endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Artificial pacing delay before the network call is issued
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// How long the error toast stays visible
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    /// HTTP request timeout
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Color theme
    #[serde(default)]
    pub theme: ThemeVariant,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8000/predict".to_string()
}

fn default_submit_delay_ms() -> u64 {
    1500
}

fn default_toast_duration_ms() -> u64 {
    5000
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            submit_delay_ms: default_submit_delay_ms(),
            toast_duration_ms: default_toast_duration_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            theme: ThemeVariant::default(),
        }
    }
}

impl Config {
    /// Load configuration from the given path, or the default location
    /// (`<config_dir>/mindcheck/config.toml`) when none is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Apply CLI flag overrides on top of the loaded configuration.
    pub fn with_overrides(mut self, cli: &Cli) -> Result<Self> {
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(theme) = &cli.theme {
            self.theme = theme.parse()?;
        }
        Ok(self)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mindcheck").join("config.toml"))
    }
}
