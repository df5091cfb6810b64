//! Static color scheme registry.
//!
//! Every scheme is defined once here and never mutated; everything else in
//! the site looks schemes up by [`SchemeKey`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::models::RgbColor;

/// Identifier selecting one of the site's color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemeKey {
    /// Orange studio palette for brand and practice pages
    Brand,
    /// Emerald palette for marketing and SEO services
    Marketing,
    /// Purple palette for AI and automation
    Automation,
    /// Cyan palette for software and CRM work
    Software,
    /// Blue palette used wherever no route-specific scheme applies
    #[default]
    Default,
}

impl SchemeKey {
    /// All scheme keys, in registry order.
    pub const ALL: [Self; 5] = [
        Self::Brand,
        Self::Marketing,
        Self::Automation,
        Self::Software,
        Self::Default,
    ];

    /// Returns the serialized identifier (e.g. `"automation"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Marketing => "marketing",
            Self::Automation => "automation",
            Self::Software => "software",
            Self::Default => "default",
        }
    }

    /// Returns the color scheme registered for this key.
    #[must_use]
    pub fn scheme(self) -> &'static ColorScheme {
        match self {
            Self::Brand => &BRAND,
            Self::Marketing => &MARKETING,
            Self::Automation => &AUTOMATION,
            Self::Software => &SOFTWARE,
            Self::Default => &DEFAULT,
        }
    }
}

impl fmt::Display for SchemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`SchemeKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color scheme '{0}' (expected one of: brand, marketing, automation, software, default)")]
pub struct UnknownSchemeKey(pub String);

impl FromStr for SchemeKey {
    type Err = UnknownSchemeKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownSchemeKey(s.to_string()))
    }
}

/// Immutable set of theme colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    /// Key this scheme is registered under
    pub key: SchemeKey,
    /// Main brand color for buttons, links and headings
    pub primary: RgbColor,
    /// Supporting color for hover states and secondary surfaces
    pub secondary: RgbColor,
    /// Light highlight color for badges and decorative accents
    pub accent: RgbColor,
    /// Deep shade for text on light backgrounds and footers
    pub dark: RgbColor,
    /// Gradient utility token applied to hero backgrounds
    pub gradient_token: &'static str,
}

/// The four scheme colors as `"r, g, b"` triples for `rgba()` composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemeRgb {
    /// Primary color triple
    pub primary: String,
    /// Secondary color triple
    pub secondary: String,
    /// Accent color triple
    pub accent: String,
    /// Dark color triple
    pub dark: String,
}

impl ColorScheme {
    /// Returns all four colors as RGB triples.
    #[must_use]
    pub fn rgb(&self) -> SchemeRgb {
        SchemeRgb {
            primary: self.primary.to_rgb_triple(),
            secondary: self.secondary.to_rgb_triple(),
            accent: self.accent.to_rgb_triple(),
            dark: self.dark.to_rgb_triple(),
        }
    }
}

/// Fallback scheme.
pub static DEFAULT: ColorScheme = ColorScheme {
    key: SchemeKey::Default,
    primary: RgbColor::new(0x3B, 0x82, 0xF6),
    secondary: RgbColor::new(0x1D, 0x4E, 0xD8),
    accent: RgbColor::new(0x60, 0xA5, 0xFA),
    dark: RgbColor::new(0x1E, 0x3A, 0x8A),
    gradient_token: "from-blue-500 to-indigo-600",
};

/// Brand and practice pages.
pub static BRAND: ColorScheme = ColorScheme {
    key: SchemeKey::Brand,
    primary: RgbColor::new(0xF9, 0x73, 0x16),
    secondary: RgbColor::new(0xEA, 0x58, 0x0C),
    accent: RgbColor::new(0xFD, 0xBA, 0x74),
    dark: RgbColor::new(0x7C, 0x2D, 0x12),
    gradient_token: "from-orange-500 to-amber-500",
};

/// Marketing and SEO.
pub static MARKETING: ColorScheme = ColorScheme {
    key: SchemeKey::Marketing,
    primary: RgbColor::new(0x10, 0xB9, 0x81),
    secondary: RgbColor::new(0x05, 0x96, 0x69),
    accent: RgbColor::new(0x6E, 0xE7, 0xB7),
    dark: RgbColor::new(0x06, 0x4E, 0x3B),
    gradient_token: "from-emerald-500 to-teal-500",
};

/// AI and automation.
pub static AUTOMATION: ColorScheme = ColorScheme {
    key: SchemeKey::Automation,
    primary: RgbColor::new(0xA8, 0x55, 0xF7),
    secondary: RgbColor::new(0x7C, 0x3A, 0xED),
    accent: RgbColor::new(0xC0, 0x84, 0xFC),
    dark: RgbColor::new(0x4C, 0x1D, 0x95),
    gradient_token: "from-purple-500 to-fuchsia-500",
};

/// Software development and CRM.
pub static SOFTWARE: ColorScheme = ColorScheme {
    key: SchemeKey::Software,
    primary: RgbColor::new(0x06, 0xB6, 0xD4),
    secondary: RgbColor::new(0x08, 0x91, 0xB2),
    accent: RgbColor::new(0x67, 0xE8, 0xF9),
    dark: RgbColor::new(0x16, 0x4E, 0x63),
    gradient_token: "from-cyan-500 to-sky-600",
};
