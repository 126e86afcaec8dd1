//! Configuration management for flights.
//!
//! This module provides configuration loading and validation using figment,
//! supporting a TOML config file, environment variables, and defaults. The
//! result is resolved once at startup and handed to the command layer, which
//! never reads the environment itself.

use std::env;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "flights";

/// Environment variable naming the data file when `--data` is not given.
pub const DATA_FILE_ENV: &str = "aregpython";

/// Lower-precedence environment override for the data file.
pub const PREFIXED_DATA_FILE_ENV: &str = "FLIGHTS_DATA_FILE";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. The `aregpython` environment variable
/// 2. The `FLIGHTS_DATA_FILE` environment variable
/// 3. TOML config file at `~/.config/flights/config.toml`
/// 4. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data file used when `--data` is not passed on the command line.
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// A config file that does not exist is skipped. The environment variables
    /// are taken verbatim as paths, so a value like `2024` or `true` is a file
    /// name and not a number or a boolean.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file));

        let mut config: Config = figment.extract()?;
        for var in [PREFIXED_DATA_FILE_ENV, DATA_FILE_ENV] {
            if let Some(value) = env::var_os(var).filter(|value| !value.is_empty()) {
                config.data_file = Some(PathBuf::from(value));
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// Load configuration for a run that may already have `--data`.
    ///
    /// When the flag names a file the configuration is only a fallback, so a
    /// broken config file is logged and replaced by the defaults instead of
    /// stopping the run.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails and `flag` does not name a file.
    pub fn load_with_flag(config_path: Option<PathBuf>, flag: Option<&Path>) -> Result<Self> {
        match Self::load_from(config_path) {
            Ok(config) => Ok(config),
            Err(err) if flag.is_some_and(|path| !path.as_os_str().is_empty()) => {
                warn!("Ignoring configuration, --data was given: {err}");
                Ok(Self::default())
            }
            Err(err) => Err(err),
        }
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured data file cannot name a file.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = self.data_file() {
            if path.file_name().is_none() {
                return Err(Error::ConfigValidation {
                    message: format!("data_file does not name a file: {}", path.display()),
                });
            }
        }
        Ok(())
    }

    /// The configured data file, ignoring an empty value.
    #[must_use]
    pub fn data_file(&self) -> Option<&Path> {
        self.data_file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Pick the data file for this run.
    ///
    /// A non-empty `--data` value wins over the configured one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataFileAbsent`] if neither source names a file.
    pub fn resolve_data_file(&self, flag: Option<&Path>) -> Result<PathBuf> {
        flag.filter(|path| !path.as_os_str().is_empty())
            .or_else(|| self.data_file())
            .map(Path::to_path_buf)
            .ok_or(Error::DataFileAbsent)
    }
}
