//! Server-side HTML rendering.
//!
//! Components take the session's [`Providers`](crate::scope::Providers) and
//! fail with [`ContextError`](crate::scope::ContextError) when a provider
//! they need is missing.

pub mod components;
pub mod focus_section;
pub mod icons;
pub mod pages;

pub use components::{css_variables, cta_button, hero_band, site_header, NAV_LINKS};
pub use focus_section::{focus_picker, focus_section};
pub use icons::Icon;
pub use pages::{render_page, Page, NOT_FOUND_PAGE, PAGES};

use crate::branding::DEFAULT_SCHEDULING_URL;

/// Site-wide rendering settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Target of scheduling CTAs that do not name their own URL
    pub scheduling_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scheduling_url: DEFAULT_SCHEDULING_URL.to_string(),
        }
    }
}
