//! Service configuration.
//!
//! Settings come from a TOML file (`numerology.toml`) with environment
//! variable overrides on top. Every setting has a default, so the service
//! also runs with no file at all.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 9000
//!
//! [numerology]
//! mahadasha_end_year = 2040
//! ```
//!
//! # Environment Variables
//!
//! - `NUMEROLOGY_CONFIG`: explicit path to the configuration file
//! - `HOST`: server host
//! - `PORT`: server port
//! - `MAHADASHA_END_YEAR`: last year a mahadasha period may start in,
//!   1900 through 2400

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::algorithms::{
    DEFAULT_MAHADASHA_END_YEAR, MAX_MAHADASHA_END_YEAR, MIN_MAHADASHA_END_YEAR,
};

/// Environment variable holding an explicit config file path.
pub const CONFIG_PATH_ENV: &str = "NUMEROLOGY_CONFIG";

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("No numerology.toml found in standard locations")]
    NotFound,

    #[error("{var} must be a valid {expected}, got '{value}'")]
    InvalidEnv {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{setting} must be between {min} and {max}, got {value}")]
    OutOfRange {
        setting: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumerologyConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub numerology: NumerologySettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Computation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumerologySettings {
    #[serde(default = "default_mahadasha_end_year")]
    pub mahadasha_end_year: i32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_mahadasha_end_year() -> i32 {
    DEFAULT_MAHADASHA_END_YEAR
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for NumerologySettings {
    fn default() -> Self {
        Self {
            mahadasha_end_year: default_mahadasha_end_year(),
        }
    }
}

impl NumerologyConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        check_end_year_setting(
            "numerology.mahadasha_end_year",
            config.numerology.mahadasha_end_year,
        )?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `numerology.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("numerology.toml"),
            PathBuf::from("backend/numerology.toml"),
            PathBuf::from("../numerology.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Resolve the effective configuration.
    ///
    /// Uses the file named by `NUMEROLOGY_CONFIG` if set, otherwise the
    /// default location, otherwise built-in defaults; then applies
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => match Self::from_default_location() {
                Ok(config) => config,
                Err(ConfigError::NotFound) => Self::default(),
                Err(e) => return Err(e),
            },
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `HOST`, `PORT` and `MAHADASHA_END_YEAR` from the process
    /// environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "PORT",
                expected: "port number",
                value: port.clone(),
            })?;
        }
        if let Some(year) = lookup("MAHADASHA_END_YEAR") {
            let parsed = year.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "MAHADASHA_END_YEAR",
                expected: "year",
                value: year.clone(),
            })?;
            self.numerology.mahadasha_end_year =
                check_end_year_setting("MAHADASHA_END_YEAR", parsed)?;
        }
        Ok(())
    }

    /// `host:port` string for binding the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn check_end_year_setting(setting: &'static str, value: i32) -> Result<i32, ConfigError> {
    if (MIN_MAHADASHA_END_YEAR..=MAX_MAHADASHA_END_YEAR).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            setting,
            value,
            min: MIN_MAHADASHA_END_YEAR,
            max: MAX_MAHADASHA_END_YEAR,
        })
    }
}
