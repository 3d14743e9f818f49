//! Preset catalogs
//!
//! The built-in solid colors and gradients offered by the picker.

use serde::{Deserialize, Serialize};

/// Solid preset with a hand-picked text color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetColor {
    /// Display name
    pub name: String,
    /// Background color, `#RRGGBB`
    pub bg: String,
    /// Text color shown on top of `bg`, `#RRGGBB`
    pub text: String,
}

impl PresetColor {
    pub fn new(name: &str, bg: &str, text: &str) -> Self {
        Self {
            name: name.to_string(),
            bg: bg.to_string(),
            text: text.to_string(),
        }
    }
}

/// Gradient preset described as a CSS `linear-gradient(...)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientPreset {
    /// Display name
    pub name: String,
    /// CSS gradient description
    pub gradient: String,
}

impl GradientPreset {
    pub fn new(name: &str, gradient: &str) -> Self {
        Self {
            name: name.to_string(),
            gradient: gradient.to_string(),
        }
    }
}

pub fn default_presets() -> Vec<PresetColor> {
    vec![
        PresetColor::new("Blue", "#3B82F6", "#FFFFFF"),
        PresetColor::new("Green", "#10B981", "#FFFFFF"),
        PresetColor::new("Red", "#EF4444", "#FFFFFF"),
        PresetColor::new("Purple", "#8B5CF6", "#FFFFFF"),
        PresetColor::new("Pink", "#EC4899", "#FFFFFF"),
        PresetColor::new("Yellow", "#F59E0B", "#000000"),
        PresetColor::new("Indigo", "#6366F1", "#FFFFFF"),
        PresetColor::new("Teal", "#14B8A6", "#FFFFFF"),
    ]
}

pub fn default_gradients() -> Vec<GradientPreset> {
    vec![
        GradientPreset::new("Sunset", "linear-gradient(135deg, #FF6B6B, #4ECDC4)"),
        GradientPreset::new("Ocean", "linear-gradient(135deg, #667eea, #764ba2)"),
        GradientPreset::new("Forest", "linear-gradient(135deg, #11998e, #38ef7d)"),
        GradientPreset::new("Fire", "linear-gradient(135deg, #FC466B, #3F5EFB)"),
    ]
}

/// Presets and gradients available to the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "default_presets")]
    pub presets: Vec<PresetColor>,

    #[serde(default = "default_gradients")]
    pub gradients: Vec<GradientPreset>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            presets: default_presets(),
            gradients: default_gradients(),
        }
    }
}

impl Catalog {
    pub fn preset(&self, index: usize) -> Option<&PresetColor> {
        self.presets.get(index)
    }

    pub fn gradient(&self, index: usize) -> Option<&GradientPreset> {
        self.gradients.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LinearGradient;
    use crate::utils::color::parse_hex_color;

    #[test]
    fn test_default_catalog_sizes() {
        let catalog = Catalog::default();
        assert_eq!(catalog.presets.len(), 8);
        assert_eq!(catalog.gradients.len(), 4);
    }

    #[test]
    fn test_default_entries_are_well_formed() {
        let catalog = Catalog::default();
        for preset in &catalog.presets {
            assert!(parse_hex_color(&preset.bg).is_some(), "{}", preset.name);
            assert!(parse_hex_color(&preset.text).is_some(), "{}", preset.name);
        }
        for gradient in &catalog.gradients {
            assert!(LinearGradient::parse(&gradient.gradient).is_ok(), "{}", gradient.name);
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::default();
        assert_eq!(catalog.preset(5).map(|p| p.text.as_str()), Some("#000000"));
        assert_eq!(catalog.gradient(1).map(|g| g.name.as_str()), Some("Ocean"));
        assert!(catalog.preset(8).is_none());
        assert!(catalog.gradient(4).is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let catalog: Catalog = serde_json::from_str(
            r##"{"presets": [{"name": "Black", "bg": "#000000", "text": "#FFFFFF"}]}"##,
        )
        .unwrap();
        assert_eq!(catalog.presets.len(), 1);
        assert_eq!(catalog.gradients, default_gradients());
    }
}
