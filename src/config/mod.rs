//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Season range to process in batch mode, by starting year
/// (a season labelled "2005-2006" starts in 2005).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonsConfig {
    #[serde(default = "default_from_year")]
    pub from_year: u16,

    #[serde(default = "default_to_year")]
    pub to_year: u16,
}

fn default_from_year() -> u16 {
    2005
}

fn default_to_year() -> u16 {
    2016
}

impl Default for SeasonsConfig {
    fn default() -> Self {
        Self {
            from_year: default_from_year(),
            to_year: default_to_year(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub seasons: SeasonsConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            seasons: SeasonsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seasons.from_year > self.seasons.to_year {
            return Err(ConfigError::ValidationError(format!(
                "Season range is reversed: {} > {}",
                self.seasons.from_year, self.seasons.to_year
            )));
        }

        // The league was founded in 1898.
        if self.seasons.from_year < 1898 {
            return Err(ConfigError::ValidationError(format!(
                "Season start year {} is before 1898",
                self.seasons.from_year
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.seasons.from_year, 2005);
        assert_eq!(config.seasons.to_year, 2016);
    }

    #[test]
    fn test_config_validation_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_reversed_range() {
        let mut config = AppConfig::default();
        config.seasons.from_year = 2016;
        config.seasons.to_year = 2005;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_prehistoric_season() {
        let mut config = AppConfig::default();
        config.seasons.from_year = 1800;
        config.seasons.to_year = 1801;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_parses_partial_file() {
        let config: AppConfig = toml::from_str(
            r#"
            data_dir = "/srv/calcio"

            [seasons]
            from_year = 2010
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/calcio"));
        assert_eq!(config.seasons.from_year, 2010);
        assert_eq!(config.seasons.to_year, 2016);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.data_dir, parsed.data_dir);
        assert_eq!(config.seasons.to_year, parsed.seasons.to_year);
    }
}
