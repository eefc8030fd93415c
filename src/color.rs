//! Hex color arithmetic for derived stylesheet tokens
//!
//! Colors reaching this module come from a color picker, so malformed input
//! is treated as a caller bug and reported as an error instead of being
//! turned into a placeholder color.

use thiserror::Error;

/// Errors that can occur when parsing a hex color
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// Hex digits were not of an accepted length
    #[error("invalid hex color length in '{value}': expected {expected} digits")]
    InvalidLength { value: String, expected: &'static str },

    /// A character outside `[0-9a-fA-F]`
    #[error("invalid hex digit '{digit}' in color '{value}'")]
    InvalidDigit { value: String, digit: char },
}

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Serialize as lowercase `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse a `#rgb` or `#rrggbb` color (the leading `#` is optional)
pub fn parse_hex(value: &str) -> Result<Rgb, ColorError> {
    let digits = value.strip_prefix('#').unwrap_or(value);

    if let Some(digit) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit {
            value: value.to_string(),
            digit,
        });
    }

    let expanded = match digits.len() {
        6 => digits.to_string(),
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => {
            return Err(ColorError::InvalidLength {
                value: value.to_string(),
                expected: "3 or 6",
            })
        }
    };

    // All digits are ASCII hex at this point, so slicing and parsing cannot fail
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).unwrap_or(0);
    Ok(Rgb::new(channel(0), channel(2), channel(4)))
}

/// Lighten (or darken, for negative `percent`) a 6-digit hex color
///
/// Each channel is shifted by `round(2.55 * percent)`, with exact halves
/// rounded toward positive infinity, and clamped to `0..=255`.
pub fn lighten(hex: &str, percent: i32) -> Result<String, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Err(ColorError::InvalidLength {
            value: hex.to_string(),
            expected: "6",
        });
    }

    let rgb = parse_hex(hex)?;
    // no shift beyond a full channel can change the result
    let amount = (2.55 * f64::from(percent) + 0.5).floor().clamp(-255.0, 255.0) as i32;
    let shift = |channel: u8| (i32::from(channel) + amount).clamp(0, 255) as u8;

    Ok(Rgb::new(shift(rgb.r), shift(rgb.g), shift(rgb.b)).to_hex())
}

/// Convert a `#rgb` or `#rrggbb` color to an `rgba(...)` expression
///
/// `alpha` is passed through untouched.
pub fn to_rgba(hex: &str, alpha: f64) -> Result<String, ColorError> {
    let rgb = parse_hex(hex)?;
    Ok(format!("rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, alpha))
}
