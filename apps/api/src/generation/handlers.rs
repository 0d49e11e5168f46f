//! Axum route handlers for the Generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::batch::{generate_batch, BatchEntry};
use crate::generation::builder::ResumeBuilder;
use crate::generation::content::strategy_for;
use crate::generation::validation::{validate_request, GenerateRequest};
use crate::llm_client::LlmClient;
use crate::state::AppState;

const DEFAULT_DOWNLOAD_NAME: &str = "resumes.zip";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub status: &'static str,
    /// Base64 (standard alphabet) of the ZIP archive.
    pub zip_data: String,
    pub filename: String,
    /// Size of the decoded archive in bytes.
    pub file_size: usize,
    pub num_resumes: usize,
    pub message: String,
    pub files: Vec<BatchEntry>,
}

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    pub zip_data: Option<String>,
    pub filename: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate
///
/// Validates the request, generates the batch synchronously and returns the
/// archive as base64 JSON.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let request = validate_request(json_body(payload)?, state.config.max_resumes)?;

    let llm = request
        .gemini_key
        .clone()
        .map(|key| LlmClient::new(state.http.clone(), key, &state.config));
    let builder = ResumeBuilder::new(strategy_for(request.mode, llm));

    let mut rng = match request.seed.or(state.config.resume_seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let batch = generate_batch(&builder, request.count, &state.page_config, &mut rng).await?;

    let filename = format!(
        "resumes_{}.zip",
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );
    let num_resumes = batch.resume_count();
    info!(
        "Returning {filename}: {num_resumes} resumes, {} bytes ({})",
        batch.archive_size(),
        request.mode.as_str()
    );

    Ok(Json(GenerateResponse {
        status: "completed",
        zip_data: BASE64.encode(&batch.archive),
        filename,
        file_size: batch.archive_size(),
        num_resumes,
        message: format!("Successfully generated {num_resumes} resumes"),
        files: batch.entries,
    }))
}

/// POST /download
///
/// Decodes a base64 archive produced by `/generate` and returns it as a file.
pub async fn handle_download(
    payload: Result<Json<DownloadRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let request = json_body(payload)?;

    let data = request
        .zip_data
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| AppError::Validation("No ZIP data provided".to_string()))?;

    let bytes = BASE64
        .decode(data.trim())
        .map_err(|e| AppError::Validation(format!("zip_data is not valid base64: {e}")))?;

    let filename = download_filename(request.filename.as_deref());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Turns a JSON extractor rejection into the service's error shape.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            Err(AppError::PayloadTooLarge)
        }
        Err(rejection) => Err(AppError::Validation(rejection.body_text())),
    }
}

/// Keeps a header-safe file name; falls back to `resumes.zip`.
fn download_filename(requested: Option<&str>) -> String {
    let cleaned: String = requested
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        DEFAULT_DOWNLOAD_NAME.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_filename_keeps_safe_names() {
        assert_eq!(
            download_filename(Some("resumes_20260101_120000.zip")),
            "resumes_20260101_120000.zip"
        );
    }

    #[test]
    fn test_download_filename_strips_header_breaking_characters() {
        assert_eq!(download_filename(Some("a\"b\r\n.zip")), "ab.zip");
        assert_eq!(download_filename(Some("..")), DEFAULT_DOWNLOAD_NAME);
        assert_eq!(download_filename(None), DEFAULT_DOWNLOAD_NAME);
    }
}
