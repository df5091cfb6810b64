//! Lumen Site Library
//!
//! Core of the Lumen Works marketing site: route-driven color theming,
//! visitor focus personalization with durable storage, static content
//! bundles, and the server-side renderer and web server built on them.

// Module declarations
pub mod branding;
pub mod cli;
pub mod config;
pub mod content;
pub mod focus;
pub mod models;
pub mod render;
pub mod scope;
pub mod theme;

#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use content::{ContentLibrary, FocusContent};
pub use focus::{FocusContext, FocusKey, FocusStorage, KeyValueStore};
pub use scope::{ContextError, Providers};
pub use theme::{ColorScheme, ColorSchemeContext, RouteThemeSync, SchemeKey};
