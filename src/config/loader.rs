//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pay
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PayConfig, PremiumSchedule, WageTable};

/// Loads and provides access to pay configuration.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// ├── wages.yaml     # Wage levels and fallback rate
/// └── premiums.yaml  # Day/time premium bands
/// ```
///
/// # Example
///
/// ```no_run
/// use turncal_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// println!("Level 2 rate: {}", loader.config().wages().base_rate(2));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if either file is missing
    /// - `ConfigParseError` if either file contains invalid YAML
    /// - `InvalidConfig` if a rate or multiplier is not positive
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let wages = Self::load_yaml::<WageTable>(&path.join("wages.yaml"))?;
        let premiums = Self::load_yaml::<PremiumSchedule>(&path.join("premiums.yaml"))?;

        let config = PayConfig::new(wages, premiums)?;
        tracing::debug!(
            path = %path.display(),
            wage_levels = config.wages().levels.len(),
            "Loaded pay configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/standard"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "turncal-config-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_standard_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
    }

    #[test]
    fn test_shipped_yaml_matches_builtin_tables() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config(), &PayConfig::standard());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("wages.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir("bad-yaml");
        fs::write(dir.join("wages.yaml"), "fallback_rate: [unclosed").unwrap();
        fs::write(dir.join("premiums.yaml"), "base_multiplier: \"1.00\"").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("wages.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_rejects_non_positive_rate() {
        let dir = scratch_dir("zero-rate");
        fs::write(
            dir.join("wages.yaml"),
            "fallback_rate: \"0\"\nlevels:\n  1: \"150.0\"\n",
        )
        .unwrap();
        fs::write(dir.join("premiums.yaml"), "base_multiplier: \"1.00\"").unwrap();

        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::InvalidConfig { .. })
        ));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_alternate_schedule_loads() {
        let dir = scratch_dir("alternate");
        fs::write(
            dir.join("wages.yaml"),
            "fallback_rate: \"100\"\nlevels:\n  5: \"300\"\n",
        )
        .unwrap();
        fs::write(
            dir.join("premiums.yaml"),
            "base_multiplier: \"1.00\"\nweekday:\n  - { from: \"22:00\", multiplier: \"1.30\" }\n",
        )
        .unwrap();

        let config = ConfigLoader::load(&dir).unwrap().into_config();
        assert_eq!(config.wages().base_rate(5), Decimal::new(300, 0));
        assert_eq!(config.wages().base_rate(1), Decimal::new(100, 0));
        assert_eq!(config.premiums().weekday.len(), 1);
        assert!(config.premiums().sunday.is_empty());
        fs::remove_dir_all(&dir).ok();
    }
}
