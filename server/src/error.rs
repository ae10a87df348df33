use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    /// The upstream API could not be reached or answered with a failure.
    #[error("upstream request failed: {0}")]
    Upstream(String),
    #[error("upstream response could not be read: {0}")]
    UpstreamPayload(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Upstream(_) => "UPSTREAM_UNAVAILABLE",
            AppError::UpstreamPayload(_) => "UPSTREAM_BAD_RESPONSE",
            AppError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream(_) | AppError::UpstreamPayload(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::UpstreamPayload(err.to_string())
        } else {
            AppError::Upstream(err.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match &self {
            AppError::Internal(err) => {
                tracing::error!("Internal server error: {:?}", err);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        let body = Json(ErrorResponse {
            error,
            code: self.code().to_string(),
        });
        (status, body).into_response()
    }
}
