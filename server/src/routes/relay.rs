//! Image relay endpoints: display proxy and forced download.
//!
//! DESIGN
//! ======
//! Both endpoints fetch an arbitrary remote image server-side and stream the
//! bytes back; they exist to let the browser load and save third-party image
//! URLs that may block direct cross-origin loads. They share one
//! fetch-and-forward core and differ only in response headers: the display
//! relay caches aggressively and preserves the upstream content type, the
//! download relay forces `Content-Disposition: attachment` and disables
//! caching. User-facing error strings are the original mixed
//! Indonesian/English ones, kept as documented behavior.

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use std::time::{SystemTime, UNIX_EPOCH};

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_TYPE, EXPIRES, PRAGMA};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::state::AppState;

/// Generic client identifier sent to the remote host.
const RELAY_USER_AGENT: &str = "Mozilla/5.0";

/// Content type used when the upstream does not declare one.
const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// Extension appended to derived filenames that have none.
const DEFAULT_EXTENSION: &str = ".jpg";

#[derive(Debug, Deserialize)]
pub struct RelayQuery {
    pub url: Option<String>,
}

/// `GET /api/proxy-image?url=` — stream a remote image back for display.
pub async fn proxy_image(State(state): State<AppState>, Query(query): Query<RelayQuery>) -> Response {
    let Some(url) = query.url else {
        return plain_text(StatusCode::BAD_REQUEST, "URL tidak ditemukan");
    };

    match fetch_remote(&state.http, &url).await {
        Ok(remote) => {
            let content_type = remote
                .content_type
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_owned());
            (
                StatusCode::OK,
                [
                    (CONTENT_TYPE, content_type),
                    (CACHE_CONTROL, "public, max-age=31536000".to_owned()),
                ],
                Body::from(remote.bytes),
            )
                .into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, %url, "display relay fetch failed");
            plain_text(StatusCode::INTERNAL_SERVER_ERROR, "Gagal memuat gambar")
        }
    }
}

/// `GET /api/download?url=` — stream a remote image as an attachment so the
/// browser saves it instead of rendering it.
pub async fn download(State(state): State<AppState>, Query(query): Query<RelayQuery>) -> Response {
    let Some(url) = query.url else {
        return plain_text(StatusCode::BAD_REQUEST, "URL gambar tidak ditemukan.");
    };

    match fetch_remote(&state.http, &url).await {
        Ok(remote) => {
            let filename = attachment_filename(&url, now_millis());
            (
                StatusCode::OK,
                [
                    (CONTENT_TYPE, DEFAULT_CONTENT_TYPE.to_owned()),
                    (CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\"")),
                    (CACHE_CONTROL, "no-cache, no-store, must-revalidate".to_owned()),
                    (PRAGMA, "no-cache".to_owned()),
                    (EXPIRES, "0".to_owned()),
                ],
                Body::from(remote.bytes),
            )
                .into_response()
        }
        // Upstream status is propagated on the download path.
        Err(RelayError::Status(status)) => {
            tracing::warn!(status, %url, "download relay upstream failure");
            let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            plain_text(code, &format!("Gagal mengunduh file. Status: {status}"))
        }
        Err(err) => {
            tracing::warn!(error = %err, %url, "download relay fetch failed");
            plain_text(StatusCode::INTERNAL_SERVER_ERROR, "Terjadi kesalahan saat mengunduh gambar.")
        }
    }
}

// =============================================================================
// FETCH CORE
// =============================================================================

struct RemoteImage {
    bytes: axum::body::Bytes,
    content_type: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum RelayError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("upstream returned status {0}")]
    Status(u16),
}

async fn fetch_remote(http: &reqwest::Client, url: &str) -> Result<RemoteImage, RelayError> {
    let response = http
        .get(url)
        .header(reqwest::header::USER_AGENT, RELAY_USER_AGENT)
        .send()
        .await
        .map_err(|e| RelayError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(RelayError::Status(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = response
        .bytes()
        .await
        .map_err(|e| RelayError::Transport(e.to_string()))?;

    Ok(RemoteImage { bytes, content_type })
}

// =============================================================================
// FILENAME DERIVATION
// =============================================================================

/// Derive an attachment filename from the URL's final path segment. The query
/// string is stripped; an empty segment falls back to a timestamped default;
/// a segment without an extension gets [`DEFAULT_EXTENSION`] appended.
fn attachment_filename(url: &str, now_millis: u128) -> String {
    let segment = url.rsplit('/').next().unwrap_or(url);
    let name = segment.split('?').next().unwrap_or(segment);

    if name.is_empty() {
        return format!("figure_art_{now_millis}{DEFAULT_EXTENSION}");
    }
    if name.contains('.') {
        name.to_owned()
    } else {
        format!("{name}{DEFAULT_EXTENSION}")
    }
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}

fn plain_text(status: StatusCode, message: &str) -> Response {
    (
        status,
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        message.to_owned(),
    )
        .into_response()
}
