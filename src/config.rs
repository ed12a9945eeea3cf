//! Runtime configuration loaded from TOML

use crate::error::{config_error, TweakResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tweak engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweaksConfig {
    /// Stack size for items without a registered definition
    pub default_max_stack_size: u32,
    /// Fallback first grid slot inside a container
    pub grid_start: usize,
    /// Fallback number of grid slots inside a container
    pub grid_size: usize,
    /// When false, forced clears roll back instead of dropping items
    pub allow_forced_clear: bool,
    /// Default log filter for binaries
    pub log_level: String,
}

impl Default for TweaksConfig {
    fn default() -> Self {
        Self {
            default_max_stack_size: 64,
            grid_start: 1,
            grid_size: 9,
            allow_forced_clear: true,
            log_level: "info".to_string(),
        }
    }
}

impl TweaksConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> TweakResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| config_error(format!("invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> TweakResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        log::debug!("[config] loaded {}", path.display());
        Ok(config)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> TweakResult<String> {
        toml::to_string_pretty(self).map_err(|e| config_error(e.to_string()))
    }

    /// Reject values no grid can work with
    pub fn validate(&self) -> TweakResult<()> {
        if self.default_max_stack_size == 0 {
            return Err(config_error("default_max_stack_size must be positive"));
        }
        if self.grid_size == 0 {
            return Err(config_error("grid_size must be positive"));
        }
        Ok(())
    }
}
