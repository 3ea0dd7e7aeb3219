//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the three API endpoints and serves the built frontend as static
//! files at `/`. CORS is permissive and attached as a response-mapping layer
//! so every API response carries the same headers; the preflight itself is an
//! explicit OPTIONS handler because the generation endpoint's contract is a
//! bodyless 204 (a `CorsLayer` would answer preflights with 200).

pub mod generate;
pub mod relay;

use std::path::PathBuf;

use axum::Router;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderValue, StatusCode};
use axum::response::Response;
use axum::routing::{get, post};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// API routes plus the static frontend fallback.
pub fn app(state: AppState) -> Router {
    let site_service = ServeDir::new(site_dir()).append_index_html_on_directories(true);

    Router::new()
        .route(
            "/api/generate",
            post(generate::generate)
                .options(generate::preflight)
                .fallback(generate::method_not_allowed),
        )
        .route("/api/proxy-image", get(relay::proxy_image))
        .route("/api/download", get(relay::download))
        .route("/healthz", get(healthz))
        .layer(axum::middleware::map_response(with_cors_headers))
        .with_state(state)
        .fallback_service(site_service)
}

/// Permissive CORS headers on every API response, success or failure.
async fn with_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("GET, POST, OPTIONS"));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("Content-Type"));
    response
}

/// Resolve the directory holding the built frontend (`trunk build` output).
fn site_dir() -> PathBuf {
    std::env::var("SITE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/dist"))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
