use crate::error::{ServerError, ServerResult};
use crate::routes::ApiResponse;
use crate::state::ServerState;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use matcher::MatchResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Analysis request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Text suspected of being lifted
    pub input_text: String,

    /// Text it may have been lifted from
    pub ref_text: String,
}

impl AnalyzeRequest {
    /// Reject blank texts and texts longer than `max_text_bytes`
    pub fn validate(&self, max_text_bytes: usize) -> ServerResult<()> {
        for (field, text) in [("input_text", &self.input_text), ("ref_text", &self.ref_text)] {
            if text.trim().is_empty() {
                return Err(ServerError::Validation(format!("{field} must not be empty")));
            }
            if text.len() > max_text_bytes {
                return Err(ServerError::Validation(format!(
                    "{field} exceeds {max_text_bytes} bytes"
                )));
            }
        }
        Ok(())
    }
}

/// Analysis response
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub matches: Vec<MatchResult>,
}

/// Decide whether `input_text` is a near-verbatim excerpt of `ref_text`.
///
/// The body is decoded by hand so that malformed JSON and oversized bodies
/// come back in the same error envelope as every other failure.
pub async fn analyze(
    State(state): State<Arc<ServerState>>,
    body: Result<Bytes, BytesRejection>,
) -> ServerResult<impl IntoResponse> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::PayloadTooLarge(state.config.max_body_size_mb)
        } else {
            ServerError::BadRequest(rejection.body_text())
        }
    })?;

    let request: AnalyzeRequest = serde_json::from_slice(&body)?;
    request.validate(state.config.max_text_bytes)?;

    let matches = state
        .matcher
        .analyze_all(&request.input_text, &request.ref_text);

    tracing::info!(
        matches = matches.len(),
        suspected = matches.iter().filter(|m| m.is_suspected_copy).count(),
        "analysis served"
    );

    Ok(Json(ApiResponse::success(AnalyzeResponse { matches })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(input: &str, reference: &str) -> AnalyzeRequest {
        AnalyzeRequest {
            input_text: input.to_string(),
            ref_text: reference.to_string(),
        }
    }

    #[test]
    fn blank_fields_rejected() {
        let err = request("  ", "ref").validate(100).unwrap_err();
        assert!(err.to_string().contains("input_text"));

        let err = request("input", "").validate(100).unwrap_err();
        assert!(err.to_string().contains("ref_text"));
    }

    #[test]
    fn oversized_text_rejected() {
        let err = request("input", "reference").validate(6).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("ref_text"));
    }

    #[test]
    fn valid_request_passes() {
        assert!(request("input", "reference").validate(100).is_ok());
    }
}
