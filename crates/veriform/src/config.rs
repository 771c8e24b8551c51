// File: src/config.rs
// Purpose: Validator configuration, optionally loaded from veriform.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Validator behavior switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Target the control's enclosing group container instead of the
    /// control itself when marking and rendering messages
    #[serde(default = "default_false")]
    pub use_alternate_styling: bool,

    /// Toggle the invalid marker class automatically after each
    /// validation pass
    #[serde(default = "default_true")]
    pub auto_mark_invalid_fields: bool,

    /// Render inline error messages automatically after each
    /// validation pass
    #[serde(default = "default_false")]
    pub auto_show_error_messages: bool,
}

// Default values
fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            use_alternate_styling: false,
            auto_mark_invalid_fields: true,
            auto_show_error_messages: false,
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ValidatorConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./veriform.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("veriform.toml")
    }
}
