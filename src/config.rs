//! Application configuration, persisted as YAML under `~/.rowplot/config.yaml`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding [`AppConfig::api_base_url`].
pub const API_URL_ENV: &str = "ROWPLOT_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOME env var not set")]
    NoHome,
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the simulation engine, without trailing slash.
    pub api_base_url: String,
    /// Window title.
    pub title: String,
    /// Initial window size in points.
    pub window_size: [f32; 2],
    /// Height of each chart in the results grid.
    pub chart_height: f32,
    /// Default `tracing` filter directive; `RUST_LOG` takes precedence.
    pub log_filter: String,
    pub dark_mode: bool,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            title: "RowLab".to_string(),
            window_size: [1400.0, 900.0],
            chart_height: 220.0,
            log_filter: "info".to_string(),
            dark_mode: true,
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME").map_err(|_| ConfigError::NoHome)?;
        Ok(PathBuf::from(home).join(".rowplot").join("config.yaml"))
    }

    pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_yaml::from_str(&s)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let s = serde_yaml::to_string(self)?;
        let mut f = fs::File::create(path).map_err(io_err)?;
        f.write_all(s.as_bytes()).map_err(io_err)?;
        Ok(())
    }

    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::default_path()?)
    }

    /// Load from the default path. A missing file yields the defaults.
    pub fn load() -> Result<AppConfig, ConfigError> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        Self::load_from(&path)
    }

    /// Apply environment overrides (currently `ROWPLOT_API_URL`).
    pub fn with_env_overrides(mut self) -> Self {
        self.apply_env_override(std::env::var(API_URL_ENV).ok());
        self
    }

    /// Apply a `ROWPLOT_API_URL` value if present and non-empty.
    pub fn apply_env_override(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.api_base_url = url;
        }
    }
}
