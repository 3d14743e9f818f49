//! Color utilities
//!
//! Hex conversion and the brightness heuristic used to pick a readable text color.

/// RGB triple, one byte per channel
pub type Rgb = (u8, u8, u8);

/// Text color used on light backgrounds
pub const BLACK_TEXT: &str = "#000000";

/// Text color used on dark backgrounds
pub const WHITE_TEXT: &str = "#FFFFFF";

/// Backgrounds brighter than this get black text
pub const BRIGHTNESS_THRESHOLD: f64 = 128.0;

/// Parse hex color string to RGB tuple
///
/// Accepts formats: "#RRGGBB" or "RRGGBB", either case.
pub fn parse_hex_color(hex: &str) -> Option<Rgb> {
    let hex = hex.trim_start_matches('#');

    // from_str_radix alone would also take a leading sign, e.g. "+f"
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Convert RGB to a lowercase `#rrggbb` string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Perceived brightness using BT.601 luma weights
///
/// result = (r * 299 + g * 587 + b * 114) / 1000, in [0, 255]
pub fn estimate_brightness(r: u8, g: u8, b: u8) -> f64 {
    let weighted = r as u32 * 299 + g as u32 * 587 + b as u32 * 114;
    weighted as f64 / 1000.0
}

/// Pick black or white text for a background
pub fn text_color_for(r: u8, g: u8, b: u8) -> &'static str {
    if estimate_brightness(r, g, b) > BRIGHTNESS_THRESHOLD {
        BLACK_TEXT
    } else {
        WHITE_TEXT
    }
}

/// Linear interpolation between two colors
///
/// result = a * (1 - t) + b * t
pub fn lerp_rgb(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;

    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}
