//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, EngineFile, WindowsFile};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── engine.yaml    # Range cap, lateness, remarks and totals switches
/// └── windows.yaml   # Fallback punch windows per slot
/// ```
///
/// # Example
///
/// ```no_run
/// use dtr_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Range cap: {} days", loader.config().range.max_days);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if any file is
    /// missing, cannot be parsed, or holds invalid values.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if a configuration file is missing
    /// - [`EngineError::ConfigParseError`] if a YAML file is malformed
    /// - [`EngineError::InvalidConfig`] if validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine = Self::load_yaml::<EngineFile>(&path.join("engine.yaml"))?;
        let windows = Self::load_yaml::<WindowsFile>(&path.join("windows.yaml"))?;

        let config = EngineConfig::from_files(engine, windows);
        config.validate()?;

        debug!(
            path = %path.display(),
            max_days = config.range.max_days,
            "loaded engine configuration"
        );
        Ok(Self { config })
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
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
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> EngineConfig {
        self.config
    }
}
