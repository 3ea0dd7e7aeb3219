//! Relay URL construction.
//!
//! The result image is displayed through the server's display relay (the
//! upstream CDN may block cross-origin loads) while the original URL is kept
//! for the download relay.

#[cfg(test)]
#[path = "relay_urls_test.rs"]
mod relay_urls_test;

use url::form_urlencoded;

/// URL that streams the image back for in-page display.
#[must_use]
pub fn proxied_image_url(result_url: &str) -> String {
    format!("/api/proxy-image?url={}", encode(result_url))
}

/// URL that forces the browser to save the image.
#[must_use]
pub fn download_url(result_url: &str) -> String {
    format!("/api/download?url={}", encode(result_url))
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
