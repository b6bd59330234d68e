use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::documents::DocumentError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::UnsupportedFormat(_) => AppError::UnsupportedFormat(err.to_string()),
            DocumentError::Extraction(_) => AppError::Extraction(err.to_string()),
        }
    }
}

impl AppError {
    /// Machine-readable error code, shared by HTTP responses and per-document results.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            AppError::Extraction(_) => "EXTRACTION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to return to clients.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::UnsupportedFormat(msg)
            | AppError::Extraction(msg) => msg.clone(),
            AppError::Internal(_) => "An internal server error occurred".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.public_message()
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_errors_map_to_codes() {
        let unsupported: AppError = DocumentError::UnsupportedFormat(".doc".to_string()).into();
        assert_eq!(unsupported.code(), "UNSUPPORTED_FORMAT");
        assert!(unsupported.public_message().contains(".doc"));

        let extraction: AppError = DocumentError::Extraction("bad zip".to_string()).into();
        assert_eq!(extraction.code(), "EXTRACTION_ERROR");
    }

    #[test]
    fn test_status_codes() {
        let resp = AppError::Validation("x".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let resp = AppError::UnsupportedFormat("x".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let resp = AppError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_message_is_not_leaked() {
        let err = AppError::Internal(anyhow::anyhow!("secret path /etc/x"));
        assert!(!err.public_message().contains("secret"));
    }
}
