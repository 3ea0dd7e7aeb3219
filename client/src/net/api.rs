//! REST API helper for the generation endpoint.
//!
//! Client-side (csr): real HTTP call via `gloo-net` with a multipart form.
//! The call only exists in browser builds; response parsing is pure and
//! host-tested.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Generic failure message shown when the server gives no usable error.
pub const GENERATION_FAILED_MESSAGE: &str = "Gagal membuat figure. Silakan coba lagi.";

/// Post the selected file to `/api/generate` and return the result URL.
///
/// # Errors
///
/// Returns a user-facing message on transport failure or a failure envelope.
#[cfg(feature = "csr")]
pub async fn generate_figure(file: &web_sys::File) -> Result<String, String> {
    let form = web_sys::FormData::new().map_err(|_| GENERATION_FAILED_MESSAGE.to_owned())?;
    form.append_with_blob_and_filename("image", file, &file.name())
        .map_err(|_| GENERATION_FAILED_MESSAGE.to_owned())?;

    let response = gloo_net::http::Request::post("/api/generate")
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let body = response.text().await.map_err(|e| e.to_string())?;
    parse_generate_response(&body)
}

/// Pure parse of the generation envelope: `success` + `result` on the happy
/// path, `error` otherwise.
///
/// # Errors
///
/// Returns the envelope's error message, or the generic fallback when the
/// body is not a usable envelope.
pub fn parse_generate_response(body: &str) -> Result<String, String> {
    #[derive(serde::Deserialize)]
    struct Wire {
        #[serde(default)]
        success: bool,
        result: Option<String>,
        error: Option<String>,
    }

    let wire: Wire =
        serde_json::from_str(body).map_err(|_| GENERATION_FAILED_MESSAGE.to_owned())?;
    match (wire.success, wire.result) {
        (true, Some(url)) if !url.is_empty() => Ok(url),
        _ => Err(wire.error.unwrap_or_else(|| GENERATION_FAILED_MESSAGE.to_owned())),
    }
}
