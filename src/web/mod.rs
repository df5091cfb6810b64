//! Web server for the site.
//!
//! Serves server-rendered pages themed by route, a small JSON API for
//! theming and focus, and the embedded static assets.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/theme?path=` - Scheme in effect for a path
//! - `GET /api/focus` - Focus stored in the visitor's cookie
//! - `PUT /api/focus` - Store a focus (`{"focus": "crm"}`)
//! - `DELETE /api/focus` - Clear the stored focus
//! - `GET /api/content/{focus}` - Content bundle for a focus key
//! - `POST /focus` - Form variant of `PUT /api/focus`, redirects back
//! - `POST /focus/clear` - Form variant of `DELETE /api/focus`, redirects back
//! - `GET /assets/{*path}` - Embedded static assets
//! - `GET /` and any other path - Themed HTML page

pub mod static_files;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::content::{ContentLibrary, FocusContent};
use crate::focus::{CookieStore, FocusContext, FocusKey, FocusStorage};
use crate::render::{render_page, Page, RenderOptions, NOT_FOUND_PAGE};
use crate::scope::Providers;
use crate::theme::{ColorSchemeContext, RouteThemeSync, SchemeKey, ThemeReport};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web server.
#[derive(Clone)]
pub struct AppState {
    /// Site configuration
    config: Arc<Config>,
    /// Content bundles (immutable after load)
    library: Arc<ContentLibrary>,
    /// Rendering settings derived from the configuration
    options: Arc<RenderOptions>,
}

impl AppState {
    /// Creates the state, loading content as configured.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let library = config.content_library()?;
        Ok(Self::with_library(config, library))
    }

    /// Creates the state around an already loaded library.
    #[must_use]
    pub fn with_library(config: Config, library: ContentLibrary) -> Self {
        let options = config.render_options();
        Self {
            config: Arc::new(config),
            library: Arc::new(library),
            options: Arc::new(options),
        }
    }

    /// Returns the loaded content library.
    #[must_use]
    pub fn library(&self) -> &ContentLibrary {
        &self.library
    }

    fn forced_scheme(&self) -> Option<SchemeKey> {
        self.config.theme.forced_scheme
    }
}

/// Providers for one request: the visitor's cookie is the focus store.
type Session = Providers<CookieStore>;

/// Builds the request's provider scope, themed for `path`.
fn open_session(state: &AppState, headers: &HeaderMap, path: &str) -> Session {
    let cookie_header = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok());
    let cookies = CookieStore::from_header(cookie_header);

    let mut colors = ColorSchemeContext::new();
    RouteThemeSync::with_override(state.forced_scheme()).navigate(path, &mut colors);

    Providers::new()
        .with_color_scheme(colors)
        .with_focus(FocusContext::new(FocusStorage::new(cookies)))
}

/// Ends the session, copying its storage writes onto the response.
fn close_session(session: Session, mut response: Response) -> Response {
    let store = session
        .into_focus()
        .and_then(|focus| focus.into_storage().into_store());

    if let Some(store) = store {
        for cookie in store.set_cookie_headers() {
            match HeaderValue::from_str(cookie) {
                Ok(value) => {
                    response.headers_mut().append(header::SET_COOKIE, value);
                }
                Err(e) => error!("Dropping unencodable Set-Cookie value: {e}"),
            }
        }
    }

    response
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Query parameters for theme lookup.
#[derive(Debug, Deserialize)]
pub struct ThemeQuery {
    /// Route path; defaults to `/`.
    pub path: Option<String>,
}

/// Current focus response.
#[derive(Debug, Serialize)]
pub struct FocusResponse {
    /// Stored focus, or null.
    pub focus: Option<FocusKey>,
    /// Display label of the focus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
}

impl FocusResponse {
    fn new(focus: Option<FocusKey>) -> Self {
        Self {
            focus,
            label: focus.map(FocusKey::label),
        }
    }
}

/// Focus update request.
///
/// Unknown keys fail deserialization and are rejected with 422.
#[derive(Debug, Deserialize)]
pub struct FocusUpdateRequest {
    /// New focus.
    pub focus: FocusKey,
}

/// Content lookup response.
#[derive(Debug, Serialize)]
pub struct ContentResponse {
    /// Requested focus.
    pub focus: FocusKey,
    /// Bundle for the focus, or null when it has none.
    pub content: Option<FocusContent>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/theme - Scheme in effect for a path.
async fn get_theme(
    State(state): State<AppState>,
    Query(query): Query<ThemeQuery>,
) -> Json<ThemeReport> {
    let path = query.path.as_deref().unwrap_or("/");
    Json(ThemeReport::with_override(path, state.forced_scheme()))
}

/// GET /api/focus - Focus stored in the visitor's cookie.
async fn get_focus(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let session = open_session(&state, &headers, "/");
    let focus = session.focus().ok().and_then(FocusContext::focus);
    close_session(session, Json(FocusResponse::new(focus)).into_response())
}

/// PUT /api/focus - Store a focus.
async fn put_focus(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<FocusUpdateRequest>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let mut session = open_session(&state, &headers, "/");
    session.focus_mut().map_err(internal_error)?.set_focus(request.focus);
    debug!(focus = %request.focus, "focus updated via API");

    let response = Json(FocusResponse::new(Some(request.focus))).into_response();
    Ok(close_session(session, response))
}

/// DELETE /api/focus - Clear the stored focus.
async fn delete_focus(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let mut session = open_session(&state, &headers, "/");
    session.focus_mut().map_err(internal_error)?.clear_focus();
    Ok(close_session(session, StatusCode::NO_CONTENT.into_response()))
}

/// GET /api/content/{focus} - Content bundle for a focus key.
async fn get_content(
    State(state): State<AppState>,
    Path(focus): Path<String>,
) -> Result<Json<ContentResponse>, (StatusCode, Json<ApiError>)> {
    let focus: FocusKey = focus.parse().map_err(|e: crate::focus::UnknownFocusKey| {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError::with_details("Unknown focus", e.to_string())),
        )
    })?;

    Ok(Json(ContentResponse {
        focus,
        content: state.library.resolve(Some(focus)).cloned(),
    }))
}

// ============================================================================
// Form Handlers
// ============================================================================

/// Form body posted by the focus picker.
#[derive(Debug, Deserialize)]
pub struct FocusForm {
    /// Selected focus.
    pub focus: FocusKey,
}

/// POST /focus - Store a focus and go back to the page.
async fn post_focus(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<FocusForm>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let mut session = open_session(&state, &headers, "/");
    session.focus_mut().map_err(internal_error)?.set_focus(form.focus);

    let back = redirect_target(&headers);
    Ok(close_session(session, Redirect::to(&back).into_response()))
}

/// POST /focus/clear - Clear the focus and go back to the page.
async fn post_focus_clear(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let mut session = open_session(&state, &headers, "/");
    session.focus_mut().map_err(internal_error)?.clear_focus();

    let back = redirect_target(&headers);
    Ok(close_session(session, Redirect::to(&back).into_response()))
}

/// Path of the `Referer`, or `/`.
///
/// Only the path (and query) is kept so redirects never leave the site.
fn redirect_target(headers: &HeaderMap) -> String {
    let Some(referer) = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
    else {
        return "/".to_string();
    };

    let path = match referer.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("/", |idx| &rest[idx..]),
        None => referer,
    };

    if path.starts_with('/') && !path.starts_with("//") {
        path.to_string()
    } else {
        "/".to_string()
    }
}

// ============================================================================
// Page Handlers
// ============================================================================

/// GET / and any unrouted path - Themed HTML page.
async fn page(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> Response {
    let path = uri.path();
    let (status, page) = match Page::find(path) {
        Some(page) => (StatusCode::OK, page),
        None => (StatusCode::NOT_FOUND, &NOT_FOUND_PAGE),
    };

    let session = open_session(&state, &headers, path);
    match render_page(page, path, &session, &state.library, &state.options) {
        Ok(html) => close_session(session, (status, Html(html)).into_response()),
        Err(e) => internal_error(e).into_response(),
    }
}

fn internal_error(e: impl std::fmt::Display) -> (StatusCode, Json<ApiError>) {
    error!("Request failed: {e}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new(e.to_string())),
    )
}

// ============================================================================
// Router
// ============================================================================

/// Creates the router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // JSON API
        .route("/api/theme", get(get_theme))
        .route(
            "/api/focus",
            get(get_focus).put(put_focus).delete(delete_focus),
        )
        .route("/api/content/{focus}", get(get_content))
        // Focus picker forms
        .route("/focus", post(post_focus))
        .route("/focus/clear", post(post_focus_clear))
        // Static assets
        .route("/assets/{*path}", get(static_files::serve_asset))
        // Pages
        .route("/", get(page))
        .fallback(page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if content fails to load or the server fails to start.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config)?;
    info!(
        bundles = state.library().len(),
        "Loaded content bundles"
    );
    let app = create_router(state);

    info!("Starting Lumen site on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_referer(referer: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::REFERER, HeaderValue::from_str(referer).unwrap());
        headers
    }

    #[test]
    fn test_redirect_target_defaults_to_root() {
        assert_eq!(redirect_target(&HeaderMap::new()), "/");
    }

    #[test]
    fn test_redirect_target_keeps_path_only() {
        assert_eq!(
            redirect_target(&headers_with_referer("https://lumenworks.dev/crm?x=1")),
            "/crm?x=1"
        );
        assert_eq!(
            redirect_target(&headers_with_referer("http://localhost:3000")),
            "/"
        );
        assert_eq!(redirect_target(&headers_with_referer("/dentists")), "/dentists");
    }

    #[test]
    fn test_redirect_target_rejects_protocol_relative() {
        assert_eq!(redirect_target(&headers_with_referer("//evil.example/x")), "/");
        assert_eq!(redirect_target(&headers_with_referer("javascript:x")), "/");
    }

    #[test]
    fn test_session_is_themed_and_hydrated() {
        let config = Config::new();
        let state = AppState::with_library(config, ContentLibrary::default());

        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("lumen_focus=ai-ml"));

        let session = open_session(&state, &headers, "/digital-marketing-seo");
        assert_eq!(
            session.color_scheme().unwrap().scheme_key(),
            SchemeKey::Marketing
        );
        assert_eq!(session.focus().unwrap().focus(), Some(FocusKey::AiMl));
    }

    #[test]
    fn test_forced_scheme_overrides_route() {
        let mut config = Config::new();
        config.theme.forced_scheme = Some(SchemeKey::Software);
        let state = AppState::with_library(config, ContentLibrary::default());

        let session = open_session(&state, &HeaderMap::new(), "/dentists");
        assert_eq!(
            session.color_scheme().unwrap().scheme_key(),
            SchemeKey::Software
        );
    }
}
