//! Static asset serving for the site.
//!
//! Stylesheets, the scheduler widget loader and icons are embedded into the
//! binary at compile time from the `assets/` directory and served under
//! `/assets/`.

use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

/// Embedded files from `assets/`.
#[derive(Embed)]
#[folder = "assets"]
#[include = "*.css"]
#[include = "*.js"]
#[include = "*.svg"]
#[include = "*.png"]
#[include = "*.ico"]
#[include = "*.woff2"]
pub struct StaticAssets;

/// Serves `/assets/{*path}`.
pub async fn serve_asset(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');

    match StaticAssets::get(path) {
        Some(content) => file_response(path, content.data.as_ref()),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Creates an HTTP response for a file with appropriate content type.
fn file_response(path: &str, content: &[u8]) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, cache_control_for_path(path))
        .body(Body::from(content.to_vec()))
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}

/// Returns the Cache-Control header for an asset.
///
/// - Fonts and images: long cache (1 week)
/// - Stylesheets and scripts: short cache (1 hour), they change with releases
fn cache_control_for_path(path: &str) -> &'static str {
    let ext = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match ext.as_str() {
        "woff2" | "png" | "ico" | "svg" => "public, max-age=604800",
        _ => "public, max-age=3600",
    }
}

/// Returns true if the stylesheet was embedded.
#[must_use]
pub fn has_embedded_assets() -> bool {
    StaticAssets::get("site.css").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_control_for_path() {
        assert_eq!(cache_control_for_path("site.css"), "public, max-age=3600");
        assert_eq!(
            cache_control_for_path("scheduler.js"),
            "public, max-age=3600"
        );
        assert_eq!(
            cache_control_for_path("favicon.SVG"),
            "public, max-age=604800"
        );
    }

    #[test]
    fn test_assets_are_embedded() {
        assert!(has_embedded_assets());
        assert!(StaticAssets::get("scheduler.js").is_some());
        assert!(StaticAssets::get("favicon.svg").is_some());
    }
}
