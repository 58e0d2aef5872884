use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bmi::HeightUnit;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// User settings (~/.config/bmi-calc/config.toml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Unit the height selector starts in.
    #[serde(default)]
    pub default_unit: HeightUnit,
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_unit: HeightUnit::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Falls back to the current directory if there is no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("bmi-calc").join("config.toml")
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_unit, HeightUnit::Cm);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_unit = \"m\"\nlog_level = \"debug\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.default_unit, HeightUnit::M);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_unit = \"m\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.default_unit, HeightUnit::M);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_unknown_unit_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_unit = \"ft\"").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
