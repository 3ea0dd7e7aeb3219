//! Figure transformation API client.
//!
//! Thin HTTP wrapper over the upstream convert-to-figure endpoint: a GET with
//! the hosted image URL as a query parameter. Pure parsing in `parse_result`
//! for testability.

#[cfg(test)]
#[path = "figure_test.rs"]
mod figure_test;

/// Browser-like identifier; the upstream rejects clients without one.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, thiserror::Error)]
pub enum FigureError {
    #[error("Failed to generate figure from API: {0}")]
    Request(String),
    #[error("Figure API returned status {0}")]
    Status(u16),
    #[error("Failed to parse figure API response: {0}")]
    Parse(String),
    #[error("API did not return a result")]
    MissingResult,
}

/// Ask the figure API to transform the hosted image, returning the result URL.
///
/// # Errors
///
/// Returns an error on transport failure, a non-success upstream status, or a
/// response without a usable `result` field.
pub async fn generate_figure(
    http: &reqwest::Client,
    figure_url: &str,
    image_url: &str,
) -> Result<String, FigureError> {
    let response = http
        .get(figure_url)
        .query(&[("imageUrl", image_url)])
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .map_err(|e| FigureError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FigureError::Status(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FigureError::Request(e.to_string()))?;

    parse_result(&body)
}

/// Pure parse of the figure API response body. Never yields an empty URL.
fn parse_result(body: &str) -> Result<String, FigureError> {
    #[derive(serde::Deserialize)]
    struct ApiResponse {
        result: Option<String>,
    }

    let api: ApiResponse = serde_json::from_str(body).map_err(|e| FigureError::Parse(e.to_string()))?;
    match api.result {
        Some(url) if !url.is_empty() => Ok(url),
        _ => Err(FigureError::MissingResult),
    }
}
