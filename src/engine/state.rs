//! Color state
//!
//! Implements the two-mode (solid / gradient) background state and the
//! reconciliation that keeps the solid background in sync with the channels.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{GradientPreset, PresetColor};
use crate::utils::color::{parse_hex_color, rgb_to_hex, text_color_for, Rgb, WHITE_TEXT};

use super::EngineError;

/// Channels at session start
pub const INITIAL_RGB: Rgb = (50, 139, 246);

/// Channels restored by the reset action
pub const RESET_RGB: Rgb = (59, 130, 246);

/// Stored as `background_color` while a gradient is shown
pub const GRADIENT_BACKGROUND: &str = "gradient";

/// Color channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Get display name for the channel
    pub fn display_name(&self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }
}

/// What the renderer should paint behind the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop<'a> {
    /// Hex color string
    Solid(&'a str),
    /// CSS gradient description
    Gradient(&'a str),
}

/// Complete picker state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorState {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Hex background in solid mode, [`GRADIENT_BACKGROUND`] in gradient mode
    ///
    /// Reconciled values are lowercase, but after a preset click this holds
    /// the preset's own string (e.g. `#10B981`). Compare case-insensitively.
    pub background_color: String,
    pub text_color: String,
    pub is_gradient: bool,
    /// CSS gradient in gradient mode, empty otherwise
    pub current_gradient: String,
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorState {
    /// Create the session-start state
    pub fn new() -> Self {
        let (red, green, blue) = INITIAL_RGB;
        let mut state = Self {
            red,
            green,
            blue,
            background_color: "#3b82f6".to_string(),
            text_color: WHITE_TEXT.to_string(),
            is_gradient: false,
            current_gradient: String::new(),
        };
        // Channels are freshly set, so the solid color is derived once up front
        state.reconcile();
        state
    }

    pub fn rgb(&self) -> Rgb {
        (self.red, self.green, self.blue)
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    fn set_rgb(&mut self, (red, green, blue): Rgb) {
        self.red = red;
        self.green = green;
        self.blue = blue;
    }

    /// Re-derive the solid background and text color from the channels
    ///
    /// No-op in gradient mode.
    pub fn reconcile(&mut self) {
        if self.is_gradient {
            return;
        }

        let (red, green, blue) = self.rgb();
        self.background_color = rgb_to_hex(red, green, blue);
        self.text_color = text_color_for(red, green, blue).to_string();
    }

    /// Move one slider
    ///
    /// Gradient mode is left untouched; reconciliation then stays suppressed.
    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
        self.reconcile();
    }

    /// Switch to a solid preset
    ///
    /// The preset's text color wins over the brightness heuristic, and the
    /// sliders follow the decoded background.
    pub fn apply_preset(&mut self, preset: &PresetColor) -> Result<(), EngineError> {
        let rgb = parse_hex_color(&preset.bg).ok_or_else(|| EngineError::MalformedPreset {
            name: preset.name.clone(),
            value: preset.bg.clone(),
        })?;

        self.is_gradient = false;
        self.current_gradient.clear();
        self.background_color = preset.bg.clone();
        self.text_color = preset.text.clone();
        self.set_rgb(rgb);
        Ok(())
    }

    /// Switch to a gradient preset
    pub fn apply_gradient(&mut self, preset: &GradientPreset) {
        self.is_gradient = true;
        self.current_gradient = preset.gradient.clone();
        self.text_color = WHITE_TEXT.to_string();
        self.background_color = GRADIENT_BACKGROUND.to_string();
        self.set_rgb((0, 0, 0));
    }

    /// Draw every channel uniformly from 0..=255
    ///
    /// Does not leave gradient mode.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        let rgb = (rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>());
        self.set_rgb(rgb);
        self.reconcile();
    }

    /// Return to the default solid blue
    pub fn reset(&mut self) {
        self.is_gradient = false;
        self.current_gradient.clear();
        self.set_rgb(RESET_RGB);
        self.reconcile();
    }

    /// Get what the renderer should paint
    pub fn backdrop(&self) -> Backdrop<'_> {
        if self.is_gradient {
            Backdrop::Gradient(&self.current_gradient)
        } else {
            Backdrop::Solid(&self.background_color)
        }
    }
}
