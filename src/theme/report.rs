//! Serializable description of the scheme a path resolves to.

use serde::Serialize;

use super::resolver::{resolve_scheme_key, route_prefix};
use super::scheme::{SchemeKey, SchemeRgb};

/// Everything about the scheme in effect for a path.
///
/// Shared by `lumen-site theme --json` and `GET /api/theme`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeReport {
    /// Path as given
    pub path: String,
    /// First path segment, if any
    pub prefix: Option<String>,
    /// Scheme key in effect
    pub scheme: SchemeKey,
    /// Whether `scheme` came from an override rather than the route table
    pub forced: bool,
    /// Hex colors
    pub colors: ThemeColors,
    /// RGB triples
    pub rgb: SchemeRgb,
    /// Gradient utility token
    pub gradient: &'static str,
}

/// Hex colors of a scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    /// Primary color
    pub primary: String,
    /// Secondary color
    pub secondary: String,
    /// Accent color
    pub accent: String,
    /// Dark color
    pub dark: String,
}

impl ThemeReport {
    /// Report for `path`, resolved through the route table.
    #[must_use]
    pub fn for_path(path: &str) -> Self {
        Self::with_override(path, None)
    }

    /// Report for `path`, with `forced` taking precedence when set.
    #[must_use]
    pub fn with_override(path: &str, forced: Option<SchemeKey>) -> Self {
        let key = forced.unwrap_or_else(|| resolve_scheme_key(path));
        let scheme = key.scheme();

        Self {
            path: path.to_string(),
            prefix: route_prefix(path).map(str::to_string),
            scheme: key,
            forced: forced.is_some(),
            colors: ThemeColors {
                primary: scheme.primary.to_hex(),
                secondary: scheme.secondary.to_hex(),
                accent: scheme.accent.to_hex(),
                dark: scheme.dark.to_hex(),
            },
            rgb: scheme.rgb(),
            gradient: scheme.gradient_token,
        }
    }
}
