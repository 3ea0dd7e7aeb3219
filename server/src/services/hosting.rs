//! Temporary file host client (tmpfiles.org).
//!
//! DESIGN
//! ======
//! Thin reqwest wrapper around the host's multipart upload endpoint. URL
//! extraction is pure (`extract_file_url`) and runs an ordered chain of
//! strategies, first success wins: the documented `data.url` field rewritten
//! to its direct-download form, then a regex scan of the raw body for the
//! host's numeric-id/filename URL shape. The host's JSON shape has changed
//! before, which is why the fallback exists at all.

#[cfg(test)]
#[path = "hosting_test.rs"]
mod hosting_test;

use std::sync::OnceLock;

use regex::Regex;

/// Filename sent to the host when the browser did not provide one.
pub const DEFAULT_UPLOAD_FILENAME: &str = "image.jpg";

#[derive(Debug, thiserror::Error)]
pub enum HostingError {
    #[error("Failed to upload image to tmpfiles.org: {0}")]
    Upload(String),
    #[error("tmpfiles.org returned status {0}")]
    UploadStatus(u16),
    #[error("Failed to get file URL from tmpfiles.org")]
    MissingFileUrl,
}

/// Upload image bytes to the file host and return a direct-download URL.
///
/// # Errors
///
/// Returns an error on transport failure, a non-success upstream status, or
/// when no file URL can be extracted from the response.
pub async fn upload_image(
    http: &reqwest::Client,
    upload_url: &str,
    bytes: Vec<u8>,
    filename: String,
    content_type: &str,
) -> Result<String, HostingError> {
    let part = reqwest::multipart::Part::bytes(bytes)
        .file_name(filename)
        .mime_str(content_type)
        .map_err(|e| HostingError::Upload(e.to_string()))?;
    let form = reqwest::multipart::Form::new().part("file", part);

    let response = http
        .post(upload_url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| HostingError::Upload(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(HostingError::UploadStatus(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| HostingError::Upload(e.to_string()))?;

    extract_file_url(&body).ok_or(HostingError::MissingFileUrl)
}

/// Extract a direct-download URL from the host's response body.
///
/// Ordered strategy chain, first success wins.
#[must_use]
pub fn extract_file_url(body: &str) -> Option<String> {
    extract_from_data_url(body).or_else(|| extract_from_raw_text(body))
}

/// Primary: the documented `data.url` field, with its path rewritten to the
/// direct-download form the figure API can fetch.
fn extract_from_data_url(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let url = value.get("data")?.get("url")?.as_str()?;
    Some(url.replacen("/tmpfiles.org/", "/tmpfiles.org/dl/", 1))
}

/// Fallback: scan the raw body for the host's numeric-id/filename URL shape
/// and reconstruct the direct-download URL from the captured path. If the
/// provider ever changes its URL format this misses and the caller reports
/// `MissingFileUrl`.
fn extract_from_raw_text(body: &str) -> Option<String> {
    let captures = hosted_url_pattern().captures(body)?;
    Some(format!("https://tmpfiles.org/dl/{}", &captures[1]))
}

fn hosted_url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"https?://tmpfiles\.org/(\d+/[A-Za-z0-9._-]+)").expect("pattern compiles")
    })
}
