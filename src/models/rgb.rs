//! sRGB color handling with hex parsing and CSS serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// sRGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Serializes as an uppercase `#RRGGBB` string so theme payloads match the
/// values written in stylesheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use lumen_site::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#3B82F6").unwrap();
    /// assert_eq!(color, RgbColor::new(59, 130, 246));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Formats the channels as a comma-separated triple, e.g. `"59, 130, 246"`.
    ///
    /// The triple slots straight into `rgba(var(--color-primary-rgb), 0.2)`.
    #[must_use]
    pub fn to_rgb_triple(&self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }

    /// Formats the color as a CSS `rgba()` value with the given alpha.
    ///
    /// Alpha is clamped to `0.0..=1.0`.
    ///
    /// ```
    /// use lumen_site::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(168, 85, 247).rgba(0.25), "rgba(168, 85, 247, 0.25)");
    /// ```
    #[must_use]
    pub fn rgba(&self, alpha: f32) -> String {
        format!("rgba({}, {})", self.to_rgb_triple(), alpha.clamp(0.0, 1.0))
    }

    /// Returns a dimmed version of the color at the given percentage.
    ///
    /// # Arguments
    ///
    /// * `percent` - Brightness percentage (0-100). 0 = black, 100 = original color.
    #[must_use]
    pub const fn dim(&self, percent: u8) -> Self {
        let percent = if percent > 100 { 100 } else { percent };
        Self {
            r: (self.r as u16 * percent as u16 / 100) as u8,
            g: (self.g as u16 * percent as u16 / 100) as u8,
            b: (self.b as u16 * percent as u16 / 100) as u8,
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#A855F7").unwrap();
        assert_eq!(color, RgbColor::new(168, 85, 247));

        let color = RgbColor::from_hex("10b981").unwrap();
        assert_eq!(color, RgbColor::new(16, 185, 129));

        let color = RgbColor::from_hex("  #FFFFFF  ").unwrap();
        assert_eq!(color, RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
        // Multi-byte characters must not panic on slicing
        assert!(RgbColor::from_hex("#ééé").is_err());
        // Signed channels
        assert!(RgbColor::from_hex("#+1+2+3").is_err());
    }

    #[test]
    fn test_to_hex_is_uppercase() {
        assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080FF");
        assert_eq!(RgbColor::from_hex("#a855f7").unwrap().to_hex(), "#A855F7");
    }

    #[test]
    fn test_rgb_triple_and_rgba() {
        let blue = RgbColor::new(59, 130, 246);
        assert_eq!(blue.to_rgb_triple(), "59, 130, 246");
        assert_eq!(blue.rgba(0.5), "rgba(59, 130, 246, 0.5)");
        assert_eq!(blue.rgba(3.0), "rgba(59, 130, 246, 1)");
    }

    #[test]
    fn test_dim() {
        let color = RgbColor::new(200, 100, 50);
        assert_eq!(color.dim(50), RgbColor::new(100, 50, 25));
        assert_eq!(color.dim(150), color);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&RgbColor::new(6, 182, 212)).unwrap();
        assert_eq!(json, "\"#06B6D4\"");

        let parsed: RgbColor = serde_json::from_str("\"#06b6d4\"").unwrap();
        assert_eq!(parsed, RgbColor::new(6, 182, 212));

        assert!(serde_json::from_str::<RgbColor>("\"teal\"").is_err());
    }
}
