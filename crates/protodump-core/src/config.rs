//! Generator configuration

use crate::error::{GeneratorError, GeneratorResult};
use crate::ident::{is_identifier, is_keyword};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options controlling the shape of emitted code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Name of the emitted JSON node tree method
    #[serde(default = "default_json_method")]
    pub json_method: String,

    /// Name of the emitted literal dump method
    #[serde(default = "default_literal_method")]
    pub literal_method: String,

    /// Text added to the indent prefix for each nested message level
    #[serde(default = "default_indent_unit")]
    pub indent_unit: String,

    /// Path to the `serde_json` crate as seen from the generated code
    #[serde(default = "default_json_crate")]
    pub json_crate: String,
}

fn default_json_method() -> String {
    "to_json".to_string()
}

fn default_literal_method() -> String {
    "to_literal".to_string()
}

fn default_indent_unit() -> String {
    "\t".to_string()
}

fn default_json_crate() -> String {
    "::serde_json".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            json_method: default_json_method(),
            literal_method: default_literal_method(),
            indent_unit: default_indent_unit(),
            json_crate: default_json_crate(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML; an empty document yields the defaults
    pub fn from_toml_str(content: &str) -> GeneratorResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> GeneratorResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration
    pub fn validate(&self) -> GeneratorResult<()> {
        for (key, name) in [
            ("json_method", &self.json_method),
            ("literal_method", &self.literal_method),
        ] {
            if !is_identifier(name) {
                return Err(GeneratorError::ConfigError(format!(
                    "{key} must be a Rust identifier, got {name:?}"
                )));
            }
            if is_keyword(name) {
                return Err(GeneratorError::ConfigError(format!(
                    "{key} cannot be the Rust keyword {name:?}"
                )));
            }
        }

        if self.json_method == self.literal_method {
            return Err(GeneratorError::ConfigError(
                "json_method and literal_method must differ".to_string(),
            ));
        }

        if self.indent_unit.is_empty() {
            return Err(GeneratorError::ConfigError(
                "indent_unit cannot be empty".to_string(),
            ));
        }

        if self.json_crate.trim().is_empty() {
            return Err(GeneratorError::ConfigError(
                "json_crate cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
