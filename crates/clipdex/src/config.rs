//! TOML configuration for Clipdex.
//!
//! All settings are optional; a missing config file yields the defaults.
//! The database lives in the platform data directory (via `directories`)
//! unless overridden.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub db: DbConfig,
    #[serde(default)]
    pub watch: WatchConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DbConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    match ProjectDirs::from("", "", "clipdex") {
        Some(dirs) => dirs.data_dir().join("clipdex.sqlite"),
        None => PathBuf::from(".clipdex/clipdex.sqlite"),
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct WatchConfig {
    /// How often to poll the OS clipboard, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    2000
}

/// The default config file location: `clipdex.toml` in the platform
/// config directory.
pub fn default_config_path() -> PathBuf {
    match ProjectDirs::from("", "", "clipdex") {
        Some(dirs) => dirs.config_dir().join("clipdex.toml"),
        None => PathBuf::from("clipdex.toml"),
    }
}

/// Parse and validate a config file.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config =
        toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.watch.poll_interval_ms == 0 {
        anyhow::bail!("watch.poll_interval_ms must be > 0");
    }

    Ok(config)
}

/// Load config from `path` when given, from the default location when it
/// exists, and fall back to built-in defaults otherwise. An explicit
/// `--config` path that cannot be read is an error.
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => load_config(p),
        None => {
            let default = default_config_path();
            if default.exists() {
                load_config(&default)
            } else {
                Ok(Config::default())
            }
        }
    }
}
