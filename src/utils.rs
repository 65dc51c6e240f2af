//! Utility functions

use iced::Color;

// ============================================================================
// Color Parsing
// ============================================================================

/// Parse a hex color string
///
/// Accepts `rgb`, `rrggbb` and `rrggbbaa`, with or without a leading `#`.
/// Returns `None` for anything else.
pub fn parse_hex_color(input: &str) -> Option<Color> {
    let hex = input.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

    match hex.len() {
        3 => {
            let nibble = |i: usize| channel(i..i + 1).map(|v| v * 17);
            Some(Color::from_rgb8(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        6 => Some(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => {
            let alpha = channel(6..8)?;
            Some(Color::from_rgba8(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                f32::from(alpha) / 255.0,
            ))
        }
        _ => None,
    }
}

/// Format a color as `#rrggbbaa`
pub fn to_hex_color(color: Color) -> String {
    let [r, g, b, a] = color.into_rgba8();
    format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
}
