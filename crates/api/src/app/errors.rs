use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use invoicegen_invoicing::RenderError;

/// Everything that can end a generate request early.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body was not a decodable invoice. Client's fault.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("rendering invoice failed: {0}")]
    Render(#[from] RenderError),

    #[error("temporary invoice file failed: {0}")]
    Artifact(#[from] std::io::Error),

    #[error("render task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::Render(_) | ApiError::Artifact(_) | ApiError::Join(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Decode(_) => "decode_error",
            ApiError::Render(_) => "render_error",
            ApiError::Artifact(_) => "artifact_error",
            ApiError::Join(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Raw decoder message as plain text.
            ApiError::Decode(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
            other => {
                tracing::error!(code = other.code(), "{other}");
                json_error(other.status(), other.code(), other.to_string())
            }
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
