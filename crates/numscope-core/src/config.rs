//! Configuration management for numscope.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult, NumscopeError};
use crate::types::CheckId;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main application configuration.
///
/// This is loaded from `~/.config/numscope/config.toml` (or platform
/// equivalent). If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Classifier settings
    pub classifier: ClassifierConfig,
    /// Report rendering settings
    pub report: ReportConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(&config_path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `NUMSCOPE_CHECKS`: Override enabled checks (comma-separated ids)
    /// - `NUMSCOPE_INCLUDE_NON_MATCHES`: Override report verbosity (true/false)
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;

        // Override from environment
        if let Ok(val) = std::env::var("NUMSCOPE_CHECKS") {
            let checks: Vec<String> = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
                .collect();
            if !checks.is_empty() {
                tracing::debug!("Override enabled_checks from env: {:?}", checks);
                config.classifier.enabled_checks = checks;
            }
        }

        if let Ok(val) = std::env::var("NUMSCOPE_INCLUDE_NON_MATCHES") {
            if let Ok(include) = val.parse() {
                config.report.include_non_matches = include;
                tracing::debug!("Override report.include_non_matches from env: {}", include);
            }
        }

        Ok(config)
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::config_path()?;
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/numscope/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("com", "numscope", "numscope").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Classifier settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Check ids to run, in any order; the classifier always evaluates them
    /// in registry registration order regardless of how they are listed here
    pub enabled_checks: Vec<String>,
}

impl ClassifierConfig {
    /// Convert the configured check id strings into validated [`CheckId`]s.
    ///
    /// # Errors
    /// Returns a validation error for any malformed id.
    pub fn enabled_check_ids(&self) -> Result<Vec<CheckId>, NumscopeError> {
        self.enabled_checks
            .iter()
            .map(|id| CheckId::new(id.clone()))
            .collect()
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            enabled_checks: vec![
                "armstrong".to_string(),
                "happy".to_string(),
                "palindrome".to_string(),
                "perfect".to_string(),
                "prime".to_string(),
            ],
        }
    }
}

/// Report rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Prefix each report with the classified value
    pub show_value: bool,
    /// Also list checks that did not match
    pub include_non_matches: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_value: true,
            include_non_matches: false,
        }
    }
}
