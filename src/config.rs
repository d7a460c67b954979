#[cfg(feature = "read_config")]
use serde::Deserialize;
#[cfg(feature = "print_config")]
use serde::Serialize;

use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "read_config", derive(Deserialize))]
#[cfg_attr(feature = "print_config", derive(Serialize))]
#[cfg_attr(any(feature = "read_config", feature = "print_config"), serde(rename_all = "snake_case"))]
pub enum UpdateMode {
    /// Clear the grid and restamp every source each tick.
    Full,
    /// Restamp only sources that moved, changed or disappeared since the last tick.
    Incremental,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "read_config", derive(Deserialize))]
#[cfg_attr(feature = "print_config", derive(Serialize))]
pub struct Config {
    pub cell_size: f32,
    pub influence_offset: f32,
    pub update_period: i32,
    pub update_mode: UpdateMode,
    pub neutral_band: f32,
}

impl Config {
    pub fn new() -> Self {
        Self {
            cell_size: 32.0,
            influence_offset: 10.0,
            update_period: 1,
            update_mode: UpdateMode::Full,
            neutral_band: 0.001,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::Invalid(format!("cell_size must be positive, got {}", self.cell_size)));
        }
        if !(self.influence_offset.is_finite() && self.influence_offset >= 0.0) {
            return Err(ConfigError::Invalid(format!("influence_offset must be non-negative, got {}", self.influence_offset)));
        }
        if self.update_period <= 0 {
            return Err(ConfigError::Invalid(format!("update_period must be positive, got {}", self.update_period)));
        }
        if !(self.neutral_band.is_finite() && self.neutral_band >= 0.0) {
            return Err(ConfigError::Invalid(format!("neutral_band must be non-negative, got {}", self.neutral_band)));
        }
        Ok(())
    }

    #[cfg(feature = "read_config")]
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "read_config")]
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_json(&content)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(feature = "read_config"))]
pub fn get_config() -> Result<Config, ConfigError> {
    Ok(Config::new())
}

/// Loads the file named by `CONFIG`, falling back to defaults when unset.
#[cfg(feature = "read_config")]
pub fn get_config() -> Result<Config, ConfigError> {
    match std::env::var("CONFIG") {
        Ok(path) => Config::from_file(path),
        Err(_) => Ok(Config::new()),
    }
}
