// report-generation-service/src/error.rs

use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DocumentError>;

/// Message returned to the caller for every failure after validation passed.
pub const GENERATION_FAILED_MESSAGE: &str = "Error generating report";

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] axum::http::header::InvalidHeaderValue),
}

impl DocumentError {
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            message: GENERATION_FAILED_MESSAGE.to_string(),
            error: Some(self.to_string()),
        }
    }
}

/// JSON body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_errors_carry_the_underlying_text() {
        let err = DocumentError::GenerationFailed("zip writer closed".to_string());
        let body = serde_json::to_value(err.to_error_response()).unwrap();
        assert_eq!(body["message"], "Error generating report");
        assert_eq!(body["error"], "Generation failed: zip writer closed");
    }

    #[test]
    fn plain_messages_omit_the_error_field() {
        let body = serde_json::to_value(ErrorResponse::message("Invalid request data")).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Invalid request data" }));
    }
}
