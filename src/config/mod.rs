//! # Configuration
//!
//! Optional TOML settings for where round logs live and how diagnostics are logged.
//! A relative `logs_dir` belongs to the application: it resolves against the directory of
//! the running executable, not the shell's working directory.
//! Every field has a default, so a missing file (or an empty one) behaves like:
//!
//! ```toml
//! [storage]
//! logs_dir = "logs"
//!
//! [logging]
//! level = "warn"
//! # file = "guessgame.log"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use guessgame::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("guessgame.toml").await?;
//!     println!("Round logs: {}", config.storage.logs_dir);
//!     Ok(())
//! }
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the `--start` / `--total` round logs. Relative paths resolve
    /// against the executable's directory.
    #[serde(default = "default_logs_dir")]
    pub logs_dir: String,
}

fn default_logs_dir() -> String {
    "logs".to_string()
}

impl StorageConfig {
    /// Absolute `logs_dir`, with a relative value placed under `app_dir`.
    pub fn resolve_logs_dir(&self, app_dir: &Path) -> PathBuf {
        let logs_dir = Path::new(&self.logs_dir);
        if logs_dir.is_absolute() {
            logs_dir.to_path_buf()
        } else {
            app_dir.join(logs_dir)
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            logs_dir: default_logs_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Append diagnostics to this file instead of (or, on a terminal, as well as) stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parse `level` into a filter. Unknown names fall back to `warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level
            .trim()
            .parse()
            .unwrap_or(log::LevelFilter::Warn)
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Round log directory for this installation: `storage.logs_dir` resolved against the
    /// directory holding the current executable.
    pub fn logs_dir(&self) -> Result<PathBuf> {
        let exe = std::env::current_exe()
            .map_err(|e| anyhow!("Failed to locate the running executable: {}", e))?;
        let app_dir = exe
            .parent()
            .ok_or_else(|| anyhow!("Executable path {} has no parent", exe.display()))?;
        Ok(self.storage.resolve_logs_dir(app_dir))
    }

    /// Load configuration from a file, falling back to defaults when the file does not exist.
    /// A file that exists but does not parse is still an error.
    pub async fn load_or_default(path: &str) -> Result<Self> {
        match fs::metadata(path).await {
            Ok(_) => Self::load(path).await,
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(anyhow!("Failed to read config file {}: {}", path, e)),
        }
    }
}
