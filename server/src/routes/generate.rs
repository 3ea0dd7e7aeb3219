//! Generation endpoint: image upload → file host → figure API → result URL.
//!
//! DESIGN
//! ======
//! One sequential request chain per invocation, no retries: a failed upstream
//! call fails the whole request immediately. Errors are converted to the JSON
//! envelope at the handler boundary; everything below it returns `Result`.

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::services::figure::{self, FigureError};
use crate::services::hosting::{self, HostingError};
use crate::state::AppState;

/// JSON envelope shared by success and failure responses.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    fn ok(result: String) -> Self {
        Self { success: true, result: Some(result), error: None }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self { success: false, result: None, error: Some(message.into()) }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("No image provided")]
    MissingImage,
    #[error("Invalid upload form: {0}")]
    Form(String),
    #[error(transparent)]
    Hosting(#[from] HostingError),
    #[error(transparent)]
    Figure(#[from] FigureError),
}

impl GenerateError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingImage | Self::Form(_) => StatusCode::BAD_REQUEST,
            Self::Hosting(_) | Self::Figure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// `POST /api/generate` — run the full generation pipeline.
pub async fn generate(State(state): State<AppState>, multipart: Multipart) -> Response {
    match run_pipeline(&state, multipart).await {
        Ok(result) => (StatusCode::OK, Json(GenerateResponse::ok(result))).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "generation failed");
            (err.status(), Json(GenerateResponse::failure(err.to_string()))).into_response()
        }
    }
}

/// `OPTIONS /api/generate` — CORS preflight: always 204 with no body.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Any verb other than POST/OPTIONS.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(GenerateResponse::failure("Method not allowed")),
    )
        .into_response()
}

async fn run_pipeline(state: &AppState, mut multipart: Multipart) -> Result<String, GenerateError> {
    let image = read_image_field(&mut multipart).await?;
    tracing::info!(filename = %image.filename, bytes = image.bytes.len(), "image received");

    let file_url = hosting::upload_image(
        &state.http,
        &state.upstreams.upload_url,
        image.bytes,
        image.filename,
        &image.content_type,
    )
    .await?;
    tracing::info!(%file_url, "uploaded to file host");

    let result = figure::generate_figure(&state.http, &state.upstreams.figure_url, &file_url).await?;
    Ok(result)
}

struct ImageField {
    bytes: Vec<u8>,
    filename: String,
    content_type: String,
}

/// Pull the `image` field out of the multipart form. Other fields are skipped.
async fn read_image_field(multipart: &mut Multipart) -> Result<ImageField, GenerateError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GenerateError::Form(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let filename = field
            .file_name()
            .unwrap_or(hosting::DEFAULT_UPLOAD_FILENAME)
            .to_owned();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_owned();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| GenerateError::Form(e.to_string()))?;

        if bytes.is_empty() {
            return Err(GenerateError::MissingImage);
        }
        return Ok(ImageField { bytes: bytes.to_vec(), filename, content_type });
    }

    Err(GenerateError::MissingImage)
}
