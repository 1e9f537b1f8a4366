use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gridnorm_core::CoreError;
use gridnorm_sheet::SheetError;
use serde_json::json;
use thiserror::Error;

/// Reasons an upload is rejected. Every variant renders as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Error getting file from request")]
    MissingFile,

    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error("Invalid JSON format for headerLabels")]
    InvalidHeaderLabels(#[source] CoreError),

    #[error("Unsupported file type")]
    UnsupportedFileType,

    #[error("Failed to decode file: {0}")]
    Decode(#[source] SheetError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Multipart(e) => e.status(),
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "upload failed");
        } else {
            tracing::warn!(error = %self, "upload rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
