//! Shared value types.
//!
//! Models are independent of rendering and request handling.

pub mod rgb;

pub use rgb::RgbColor;
