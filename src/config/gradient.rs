//! CSS linear-gradient descriptions
//!
//! Gradient presets are stored as CSS strings such as
//! `linear-gradient(135deg, #FF6B6B, #4ECDC4)`. The renderer needs the angle
//! and the color stops, so they are parsed here.

use thiserror::Error;

use crate::utils::color::{lerp_rgb, parse_hex_color, Rgb};

/// Gradient parse failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradientParseError {
    #[error("expected `linear-gradient(...)`, got `{0}`")]
    NotLinearGradient(String),
    #[error("invalid angle `{0}` (expected e.g. `135deg`)")]
    InvalidAngle(String),
    #[error("invalid color stop `{0}` (expected `#RRGGBB`)")]
    InvalidStop(String),
    #[error("a gradient needs at least two color stops, got {0}")]
    TooFewStops(usize),
}

/// Parsed linear gradient
///
/// Angles follow CSS: 0deg points up, 90deg points right, clockwise.
/// Stops are evenly spaced along the gradient line. Only [`LinearGradient::parse`]
/// builds one, so there are always at least two stops.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    angle_deg: f32,
    stops: Vec<Rgb>,
}

/// Default CSS direction (`to bottom`)
const DEFAULT_ANGLE_DEG: f32 = 180.0;

impl LinearGradient {
    /// Parse a CSS `linear-gradient(...)` string
    pub fn parse(css: &str) -> Result<Self, GradientParseError> {
        let inner = css
            .trim()
            .strip_prefix("linear-gradient(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| GradientParseError::NotLinearGradient(css.to_string()))?;

        let mut parts = inner.split(',').map(str::trim).peekable();

        let angle_deg = match parts.peek() {
            Some(first) if !first.starts_with('#') => {
                let angle = parse_angle(first)?;
                parts.next();
                angle
            }
            _ => DEFAULT_ANGLE_DEG,
        };

        let stops = parts
            .map(|part| {
                parse_hex_color(part)
                    .ok_or_else(|| GradientParseError::InvalidStop(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if stops.len() < 2 {
            return Err(GradientParseError::TooFewStops(stops.len()));
        }

        Ok(Self { angle_deg, stops })
    }

    /// Unit direction of the gradient line in screen space (y grows downward)
    pub fn direction(&self) -> (f32, f32) {
        let rad = self.angle_deg.to_radians();
        (rad.sin(), -rad.cos())
    }

    /// Color at position `t` along the gradient line (0 = first stop, 1 = last)
    pub fn sample(&self, t: f32) -> Rgb {
        match self.stops.as_slice() {
            [] => return (0, 0, 0),
            [only] => return *only,
            _ => {}
        }

        let segments = (self.stops.len() - 1) as f32;
        let scaled = t.clamp(0.0, 1.0) * segments;
        let index = (scaled.floor() as usize).min(self.stops.len() - 2);

        lerp_rgb(self.stops[index], self.stops[index + 1], scaled - index as f32)
    }
}

fn parse_angle(token: &str) -> Result<f32, GradientParseError> {
    token
        .strip_suffix("deg")
        .and_then(|value| value.trim().parse::<f32>().ok())
        .ok_or_else(|| GradientParseError::InvalidAngle(token.to_string()))
}
