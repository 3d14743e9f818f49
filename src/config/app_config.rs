//! Application configuration
//!
//! Optional JSON file passed with `--config`. Every field has a default, so an
//! empty object is a valid configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::catalog::Catalog;
use super::gradient::{GradientParseError, LinearGradient};
use crate::utils::color::parse_hex_color;

/// Catalog validation failure
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("preset `{name}` has malformed {field} color `{value}`")]
    MalformedPresetColor {
        name: String,
        field: &'static str,
        value: String,
    },
    #[error("gradient `{name}` is malformed: {source}")]
    MalformedGradient {
        name: String,
        #[source]
        source: GradientParseError,
    },
    #[error("the {0} catalog is empty")]
    EmptyCatalog(&'static str),
}

/// Window options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: f32,

    #[serde(default = "default_window_height")]
    pub height: f32,

    #[serde(default = "default_window_title")]
    pub title: String,
}

fn default_window_width() -> f32 {
    560.0
}

fn default_window_height() -> f32 {
    900.0
}

fn default_window_title() -> String {
    "Color Changer".to_string()
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            title: default_window_title(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,

    /// Preset and gradient catalogs
    #[serde(flatten)]
    pub catalog: Catalog,

    /// Fixed RNG seed for the randomize action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Load and validate configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_json(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every catalog entry can be applied and rendered
    pub fn validate(&self) -> Result<(), ConfigError> {
        let catalog = &self.catalog;

        if catalog.presets.is_empty() {
            return Err(ConfigError::EmptyCatalog("preset"));
        }
        if catalog.gradients.is_empty() {
            return Err(ConfigError::EmptyCatalog("gradient"));
        }

        for preset in &catalog.presets {
            for (field, value) in [("background", &preset.bg), ("text", &preset.text)] {
                if parse_hex_color(value).is_none() {
                    return Err(ConfigError::MalformedPresetColor {
                        name: preset.name.clone(),
                        field,
                        value: value.clone(),
                    });
                }
            }
        }

        for gradient in &catalog.gradients {
            LinearGradient::parse(&gradient.gradient).map_err(|source| {
                ConfigError::MalformedGradient {
                    name: gradient.name.clone(),
                    source,
                }
            })?;
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
        assert_eq!(config.window.title, "Color Changer");
        assert_eq!(config.catalog.presets.len(), 8);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_object_is_valid() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config.window.width, 560.0);
        assert_eq!(config.catalog.gradients.len(), 4);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_json(
            r##"{
                "window": {"title": "Picker"},
                "gradients": [
                    {"name": "Mono", "gradient": "linear-gradient(90deg, #000000, #ffffff)"}
                ],
                "seed": 7
            }"##,
        )
        .unwrap();
        assert_eq!(config.window.title, "Picker");
        assert_eq!(config.window.height, 900.0);
        assert_eq!(config.catalog.gradients.len(), 1);
        assert_eq!(config.catalog.presets.len(), 8);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_malformed_preset_rejected() {
        let mut config = AppConfig::default();
        config.catalog.presets[0].bg = "#3B82F".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MalformedPresetColor { field: "background", .. }
        ));
        assert!(err.to_string().contains("Blue"));
    }

    #[test]
    fn test_signed_hex_preset_rejected() {
        let config = AppConfig::from_json(
            r##"{"presets": [{"name": "Signed", "bg": "#+f+f+f", "text": "#+0+0+0"}]}"##,
        );
        assert!(config.is_err());

        let mut config = AppConfig::default();
        config.catalog.presets[3].text = "#+0+0+0".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MalformedPresetColor { field: "text", .. })
        ));
    }

    #[test]
    fn test_malformed_gradient_rejected() {
        let mut config = AppConfig::default();
        config.catalog.gradients[2].gradient = "linear-gradient(135deg, #11998e)".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MalformedGradient {
                source: GradientParseError::TooFewStops(1),
                ..
            })
        ));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(AppConfig::from_json(r#"{"presets": []}"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load_from_file("/nonexistent/color_changer.json").unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
