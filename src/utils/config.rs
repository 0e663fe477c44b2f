// Configuration utilities
// Author: Gabriel Demetrios Lafis

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of non-missing values sampled per column
pub const DEFAULT_SAMPLE_LIMIT: usize = 500;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub inference: InferenceConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Dtype inference configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub sample_limit: usize,
}

/// Console display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub max_rows: usize,
    pub max_columns: usize,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

/// Per-frame settings derived from the configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameSettings {
    pub inference: InferenceConfig,
    pub display: DisplayConfig,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        InferenceConfig {
            sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            max_rows: 10,
            max_columns: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

/// Error raised while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON config error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML config error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Unsupported config file format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&contents)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&contents)?,
            _ => {
                return Err(ConfigError::UnsupportedFormat(
                    path.display().to_string(),
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inference.sample_limit == 0 {
            return Err(ConfigError::InvalidValue(
                "inference.sample_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the log level filter
    pub fn log_level_filter(&self) -> log::LevelFilter {
        match self.logging.level.to_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Info,
        }
    }

    /// Settings carried by every frame built under this configuration
    pub fn frame_settings(&self) -> FrameSettings {
        FrameSettings {
            inference: self.inference,
            display: self.display,
        }
    }
}
