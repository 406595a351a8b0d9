//! Configuration management module
//!
//! Handles loading, saving, and validation of application settings
//! and the persisted practice set.

use crate::{QuizError, Result, APP_NAME, CONFIG_FILE, DEFAULT_FEEDBACK_DELAY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub mod persistence;

pub use persistence::PracticeStore;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// How long feedback stays visible before the next flag appears
    pub feedback_delay: Duration,
    /// Fixed shuffle seed; `None` shuffles from entropy
    pub shuffle_seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
            shuffle_seed: None,
        }
    }
}

impl QuizConfig {
    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.feedback_delay.is_zero() {
            return Err(QuizError::ConfigError(
                "Feedback delay must be greater than 0".to_string(),
            ));
        }

        const MAX_FEEDBACK_DELAY: Duration = Duration::from_secs(10);
        if self.feedback_delay > MAX_FEEDBACK_DELAY {
            return Err(QuizError::ConfigError(format!(
                "Feedback delay too long: {}ms (max: {}ms)",
                self.feedback_delay.as_millis(),
                MAX_FEEDBACK_DELAY.as_millis()
            )));
        }

        Ok(())
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if the file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            QuizError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            QuizError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_path = Self::config_file_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                QuizError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| QuizError::ConfigError(format!("Failed to serialize configuration: {}", e)))?;

        fs::write(&config_path, content).map_err(|e| {
            QuizError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/flagquiz/flagquiz.toml or the platform equivalent
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| QuizError::ConfigError("Unable to determine config directory".to_string()))?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay_matches_contract() {
        let config = QuizConfig::default();
        assert_eq!(config.feedback_delay, Duration::from_millis(1500));
        assert!(config.shuffle_seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_delay() {
        let config = QuizConfig {
            feedback_delay: Duration::ZERO,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_excessive_delay() {
        let config = QuizConfig {
            feedback_delay: Duration::from_secs(60),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = QuizConfig {
            feedback_delay: Duration::from_millis(800),
            shuffle_seed: Some(42),
        };
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        let restored: QuizConfig = toml::from_str(&toml_str).expect("Failed to deserialize from TOML");

        assert_eq!(restored.feedback_delay, config.feedback_delay);
        assert_eq!(restored.shuffle_seed, config.shuffle_seed);
    }

    #[test]
    fn test_config_file_path() {
        let path = QuizConfig::config_file_path().unwrap();
        assert!(path.to_string_lossy().contains("flagquiz"));
        assert!(path.to_string_lossy().contains("flagquiz.toml"));
    }
}
