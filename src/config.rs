// src/config.rs

//! Runtime settings.
//!
//! Resolution order, later wins: built-in defaults, `config.toml` (from the
//! platform config directory or `--config`), then environment variables and
//! command-line flags, which clap merges for us.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;
use strum::Display;
use tracing::debug;
use url::Url;

use crate::logging::project_directory;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5001";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BackendMode {
    /// Real HTTP calls to the analysis service.
    Live,
    /// Timer-driven stand-in with synthesized results.
    Mock,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    pub mode: BackendMode,
    pub base_url: Url,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            mode: BackendMode::Live,
            base_url: Url::parse(DEFAULT_BACKEND_URL).expect("default backend URL parses"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MockSettings {
    pub delay_ms: u64,
}

impl Default for MockSettings {
    fn default() -> Self {
        Self { delay_ms: 3500 }
    }
}

impl MockSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub backend: BackendSettings,
    pub mock: MockSettings,
}

/// Terminal résumé analyser.
#[derive(Debug, Parser)]
#[command(name = "resumescope", version)]
pub struct Cli {
    /// Résumé PDF to analyse straight away.
    pub file: Option<PathBuf>,

    /// Base URL of the analysis backend.
    #[arg(long, env = "RESUMESCOPE_BACKEND_URL")]
    pub backend_url: Option<Url>,

    /// Which backend strategy to use.
    #[arg(long, value_enum, env = "RESUMESCOPE_BACKEND_MODE")]
    pub mode: Option<BackendMode>,

    /// Shorthand for `--mode mock`; wins over `--mode` and the environment.
    #[arg(long)]
    pub mock: bool,

    /// Read settings from this file instead of the default location.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn default_config_path() -> Option<PathBuf> {
    project_directory().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).wrap_err("Invalid settings file")
    }

    /// Reads `path` when given (it must exist), otherwise the default file
    /// if there is one.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(explicit) => explicit.to_path_buf(),
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(found) => found,
                None => return Ok(Self::default()),
            },
        };
        debug!(path = %path.display(), "Loading settings.");
        let text = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("Could not read settings from {}", path.display()))?;
        Self::from_toml_str(&text).wrap_err_with(|| format!("In {}", path.display()))
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(url) = &cli.backend_url {
            self.backend.base_url = url.clone();
        }
        if let Some(mode) = cli.mode {
            self.backend.mode = mode;
        }
        if cli.mock {
            self.backend.mode = BackendMode::Mock;
        }
    }

    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut settings = Self::load(cli.config.as_deref())?;
        settings.apply_cli(cli);
        Ok(settings)
    }
}
