//! Route path to color scheme resolution.
//!
//! Only the first non-empty path segment matters: `/ai-automation` and
//! `/ai-automation/case-studies/42` resolve to the same scheme. Resolution is
//! total; anything not in [`ROUTE_SCHEMES`] gets [`SchemeKey::Default`].

use super::scheme::{ColorScheme, SchemeKey};
use crate::models::RgbColor;

/// Route prefix (first path segment) to scheme key.
///
/// Extend by adding entries; prefixes are matched exactly.
pub const ROUTE_SCHEMES: &[(&str, SchemeKey)] = &[
    ("ai-automation", SchemeKey::Automation),
    ("automation", SchemeKey::Automation),
    ("digital-marketing-seo", SchemeKey::Marketing),
    ("marketing", SchemeKey::Marketing),
    ("software-development", SchemeKey::Software),
    ("custom-software", SchemeKey::Software),
    ("crm", SchemeKey::Software),
    ("tee-sheet", SchemeKey::Software),
    ("dentists", SchemeKey::Brand),
    ("about", SchemeKey::Brand),
];

/// Triple used when a hex color cannot be parsed (the default primary).
pub const DEFAULT_RGB_TRIPLE: &str = "59, 130, 246";

/// Returns the first non-empty segment of a route path.
///
/// The path is expected without query or fragment (as `Uri::path` gives it).
///
/// ```
/// use lumen_site::theme::route_prefix;
///
/// assert_eq!(route_prefix("//crm/pipeline"), Some("crm"));
/// assert_eq!(route_prefix("/"), None);
/// ```
#[must_use]
pub fn route_prefix(path: &str) -> Option<&str> {
    path.split('/').find(|segment| !segment.is_empty())
}

/// Resolves a route path to its scheme key.
#[must_use]
pub fn resolve_scheme_key(path: &str) -> SchemeKey {
    let Some(prefix) = route_prefix(path) else {
        return SchemeKey::Default;
    };

    ROUTE_SCHEMES
        .iter()
        .find(|(route, _)| *route == prefix)
        .map_or(SchemeKey::Default, |(_, key)| *key)
}

/// Resolves a route path straight to its color scheme.
#[must_use]
pub fn resolve_colors(path: &str) -> &'static ColorScheme {
    resolve_scheme_key(path).scheme()
}

/// Converts a hex color to an `"r, g, b"` triple.
///
/// Malformed input yields [`DEFAULT_RGB_TRIPLE`] instead of an error.
#[must_use]
pub fn hex_to_rgb_triple(hex: &str) -> String {
    RgbColor::from_hex(hex).map_or_else(
        |_| DEFAULT_RGB_TRIPLE.to_string(),
        |color| color.to_rgb_triple(),
    )
}
