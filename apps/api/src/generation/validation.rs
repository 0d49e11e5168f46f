//! Validation of `POST /generate` bodies. Runs before any generation work.

use serde::Deserialize;

use crate::errors::AppError;
use crate::generation::content::ContentMode;

/// Raw request body. Every field is optional at the serde level so that a
/// missing field produces a readable validation message instead of a
/// deserializer error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    pub num_resumes: Option<i64>,
    pub content_type: Option<String>,
    pub gemini_key: Option<String>,
    pub seed: Option<u64>,
}

/// A request that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub count: usize,
    pub mode: ContentMode,
    /// Present iff `mode == Gemini`.
    pub gemini_key: Option<String>,
    pub seed: Option<u64>,
}

pub fn range_message(max_resumes: usize) -> String {
    format!("num_resumes must be between 1 and {max_resumes}")
}

/// Checks bounds and the `content_type` / `gemini_key` pairing.
pub fn validate_request(
    request: GenerateRequest,
    max_resumes: usize,
) -> Result<ValidatedRequest, AppError> {
    let count = request
        .num_resumes
        .ok_or_else(|| AppError::Validation("num_resumes is required".to_string()))?;
    if count < 1 || count > max_resumes as i64 {
        return Err(AppError::Validation(range_message(max_resumes)));
    }

    let mode = match request.content_type.as_deref() {
        None => ContentMode::Template,
        Some(raw) => raw
            .parse::<ContentMode>()
            .map_err(|_| AppError::Validation("Invalid content type".to_string()))?,
    };

    let gemini_key = match mode {
        ContentMode::Template => None,
        ContentMode::Gemini => {
            let key = request
                .gemini_key
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .ok_or_else(|| {
                    AppError::Validation(
                        "Gemini API key required for Gemini content type".to_string(),
                    )
                })?;
            Some(key)
        }
    };

    Ok(ValidatedRequest {
        count: count as usize,
        mode,
        gemini_key,
        seed: request.seed,
    })
}
