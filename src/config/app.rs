// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

#[cfg(feature = "logging")]
use tracing::warn;

use crate::algo::DigestAlgorithm;
use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use crate::CoreResult as Result;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_digest")]
    pub digest: DigestSettings,
    #[serde(default = "default_logging")]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DigestSettings {
    #[serde(default)]
    pub algorithm: DigestAlgorithm,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            digest: default_digest(),
            logging: default_logging(),
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Parse a config file without touching the global cache
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(toml::from_str(&content)?)
}

/// Like [`load_from`], but a missing file yields the built-in defaults.
/// Any other read error is returned.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Config> {
    match std::fs::read_to_string(path.as_ref()) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            #[cfg(feature = "logging")]
            warn!(path = %path.as_ref().display(), "config file not found, using built-in defaults");
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Load config once per process — falls back to defaults if the file is missing
pub fn load() -> Result<&'static Config> {
    if let Some(conf) = CONFIG.get() {
        return Ok(conf);
    }

    let config_path =
        std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let conf = load_or_default(&config_path)?;

    // First writer wins
    Ok(CONFIG.get_or_init(|| conf))
}
