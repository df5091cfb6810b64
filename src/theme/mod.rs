//! Path-driven theming.
//!
//! A route path picks a [`SchemeKey`] through [`ROUTE_SCHEMES`]; the key
//! selects an immutable [`ColorScheme`]. [`ColorSchemeContext`] holds the
//! scheme in effect and [`RouteThemeSync`] keeps it aligned with navigation.

pub mod context;
pub mod report;
pub mod resolver;
pub mod scheme;

pub use context::{ColorSchemeContext, RouteThemeSync};
pub use report::{ThemeColors, ThemeReport};
pub use resolver::{
    hex_to_rgb_triple, resolve_colors, resolve_scheme_key, route_prefix, DEFAULT_RGB_TRIPLE,
    ROUTE_SCHEMES,
};
pub use scheme::{ColorScheme, SchemeKey, SchemeRgb, UnknownSchemeKey};
