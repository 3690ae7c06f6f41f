//! Configuration file (`iconsheet.yaml` or JSON) loading.

use std::path::Path;

use crate::error::{Result, SheetError};

use super::layer::PartialConfig;

impl PartialConfig {
    /// Load a layer from disk. `.json` files are read as JSON, anything else
    /// as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SheetError::io(path, "Failed to read config", e))?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse_yaml(&content)
        }
    }

    /// Parse a layer from YAML.
    pub fn parse_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| SheetError::Config {
            message: format!("Invalid config: {}", e),
            help: Some("Check iconsheet.yaml syntax".to_string()),
        })
    }

    /// Parse a layer from JSON.
    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| SheetError::Config {
            message: format!("Invalid JSON config: {}", e),
            help: None,
        })
    }
}
