//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one `reqwest::Client` reused across requests plus the two upstream
//! endpoints, which are env-overridable so deployments and tests can point
//! at stand-ins. Nothing here outlives a request: the handlers are stateless
//! relays with no caching and no cross-request coordination.

use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 60;
const CONNECT_TIMEOUT_SECS: u64 = 10;

const DEFAULT_UPLOAD_URL: &str = "https://tmpfiles.org/api/v1/upload";
const DEFAULT_FIGURE_URL: &str = "https://api.nekolabs.my.id/tools/convert/tofigure";

/// Upstream endpoints consumed by the generation pipeline.
#[derive(Debug, Clone)]
pub struct Upstreams {
    /// Multipart upload endpoint of the temporary file host.
    pub upload_url: String,
    /// Figure transformation endpoint (GET with an `imageUrl` query).
    pub figure_url: String,
}

impl Upstreams {
    fn from_env() -> Self {
        Self {
            upload_url: std::env::var("UPLOAD_API_URL").unwrap_or_else(|_| DEFAULT_UPLOAD_URL.into()),
            figure_url: std::env::var("FIGURE_API_URL").unwrap_or_else(|_| DEFAULT_FIGURE_URL.into()),
        }
    }
}

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — the inner reqwest client is internally
/// Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstreams: Upstreams,
}

impl AppState {
    /// Build state from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_env() -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, upstreams: Upstreams::from_env() })
    }
}
