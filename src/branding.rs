//! Branding and site identity configuration.
//!
//! This module centralizes all branding-related strings (names, storage keys,
//! paths) so that a rebrand touches a single file.

/// The human-readable display name of the consultancy.
///
/// Used in:
/// - Page titles and the site header
/// - CLI help text
pub const SITE_DISPLAY_NAME: &str = "Lumen Works";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "lumen-site";

/// The directory name for application data (config, focus storage).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "LumenSite";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "LUMEN_CONFIG_DIR";

/// Well-known key under which the selected focus is persisted.
pub const FOCUS_STORAGE_KEY: &str = "lumen.focus";

/// Cookie carrying the persisted focus on the web surface.
///
/// Underscore variant of [`FOCUS_STORAGE_KEY`]; some proxies mangle dots in
/// cookie names.
pub const FOCUS_COOKIE_NAME: &str = "lumen_focus";

/// Short tagline used in page metadata.
pub const SITE_TAGLINE: &str = "Software, automation and growth for service businesses";

/// Default scheduling page used by "book a call" links.
pub const DEFAULT_SCHEDULING_URL: &str = "https://calendly.com/lumen-works/intro";

// ============================================================================
// Derived values (computed from the above)
// ============================================================================

/// Page title for a page section, e.g. `"CRM | Lumen Works"`.
pub fn page_title(section: &str) -> String {
    if section.is_empty() {
        SITE_DISPLAY_NAME.to_string()
    } else {
        format!("{} | {}", section, SITE_DISPLAY_NAME)
    }
}
