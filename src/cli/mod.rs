//! CLI command handlers for the site.
//!
//! Headless, scriptable access to theming, focus storage, content bundles
//! and configuration for automation and CI checks.

pub mod common;
pub mod config;
pub mod content;
pub mod focus;
pub mod theme;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use content::ContentArgs;
pub use focus::FocusArgs;
pub use theme::ThemeArgs;
