//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/hash-diffusion/config.toml

pub mod defaults;

use crate::analysis::{AvalancheParams, BitBiasParams, RunsParams};
use crate::error::{Error, Result};
use crate::suite::SuiteParams;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Driver defaults
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Avalanche test parameters
    #[serde(default)]
    pub avalanche: AvalancheParams,

    /// Bit bias test parameters
    #[serde(default)]
    pub bit_bias: BitBiasParams,

    /// Runs test parameters
    #[serde(default)]
    pub runs: RunsParams,
}

/// Driver defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,

    /// Default message source
    #[serde(default = "default_source")]
    pub source: String,

    /// Candidates run by `suite` when none are given
    #[serde(default = "default_hashes")]
    pub hashes: Vec<String>,
}

// Default value functions for serde
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}
fn default_hashes() -> Vec<String> {
    DEFAULT_HASHES.iter().map(|s| s.to_string()).collect()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            source: default_source(),
            hashes: default_hashes(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, creating a default file if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Analyzer parameters for a suite run
    pub fn suite_params(&self) -> SuiteParams {
        SuiteParams {
            avalanche: self.avalanche,
            bit_bias: self.bit_bias,
            runs: self.runs,
        }
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "format"] => Some(self.defaults.format.clone()),
            ["defaults", "source"] => Some(self.defaults.source.clone()),
            ["defaults", "hashes"] => Some(self.defaults.hashes.join(",")),

            ["avalanche", "sample_count"] => Some(self.avalanche.sample_count.to_string()),
            ["avalanche", "message_length_bytes"] => {
                Some(self.avalanche.message_length_bytes.to_string())
            }

            ["bit_bias", "message_count"] => Some(self.bit_bias.message_count.to_string()),
            ["bit_bias", "message_length_bytes"] => {
                Some(self.bit_bias.message_length_bytes.to_string())
            }

            ["runs", "sample_count"] => Some(self.runs.sample_count.to_string()),
            ["runs", "message_length_bytes"] => Some(self.runs.message_length_bytes.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "format"] => {
                self.defaults.format = value.to_string();
            }
            ["defaults", "source"] => {
                self.defaults.source = value.to_string();
            }
            ["defaults", "hashes"] => {
                self.defaults.hashes = value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }

            ["avalanche", "sample_count"] => {
                self.avalanche.sample_count = parse_positive(key, value)?;
            }
            ["avalanche", "message_length_bytes"] => {
                self.avalanche.message_length_bytes = parse_positive(key, value)?;
            }

            ["bit_bias", "message_count"] => {
                self.bit_bias.message_count = parse_positive(key, value)?;
            }
            ["bit_bias", "message_length_bytes"] => {
                self.bit_bias.message_length_bytes = parse_positive(key, value)?;
            }

            ["runs", "sample_count"] => {
                self.runs.sample_count = parse_positive(key, value)?;
            }
            ["runs", "message_length_bytes"] => {
                self.runs.message_length_bytes = parse_positive(key, value)?;
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "defaults.format",
            "defaults.source",
            "defaults.hashes",
            "avalanche.sample_count",
            "avalanche.message_length_bytes",
            "bit_bias.message_count",
            "bit_bias.message_length_bytes",
            "runs.sample_count",
            "runs.message_length_bytes",
        ]
    }
}

fn parse_positive(key: &str, value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::Config(format!(
            "Invalid value for {}: {} (expected a positive integer)",
            key, value
        ))),
    }
}
