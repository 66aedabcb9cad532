//! Uniform `{success: false, error, ...}` failure envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Route not found: {method} {path}")]
    NotFound { path: String, method: String },

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    /// Server-side failure reported under a caller-facing label such as
    /// "Failed to upload PDF".
    #[error("{label}: {source}")]
    Labeled {
        label: &'static str,
        source: anyhow::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest(anyhow::anyhow!(message.into()))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InternalError(_)
            | AppError::Labeled { .. }
            | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

/// Internal diagnostic text attached to a 5xx response.
///
/// It never reaches the body directly; the diagnostics middleware decides
/// whether to publish it based on the deployment environment.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (error_message, path, method, detail) = match self {
            AppError::BadRequest(err) => (err.to_string(), None, None, None),
            AppError::NotFound { path, method } => (
                "Route not found".to_string(),
                Some(path),
                Some(method),
                None,
            ),
            AppError::InternalError(err) => (
                "Internal server error".to_string(),
                None,
                None,
                Some(format!("{:#}", err)),
            ),
            AppError::Labeled { label, source } => {
                (label.to_string(), None, None, Some(format!("{:#}", source)))
            }
            AppError::ConfigError(err) => (
                "Configuration error".to_string(),
                None,
                None,
                Some(err.to_string()),
            ),
        };

        if status.is_server_error() {
            tracing::error!(
                status = status.as_u16(),
                error = %error_message,
                detail = detail.as_deref().unwrap_or("-"),
                "Request failed"
            );
        }

        let mut res = (
            status,
            Json(ErrorResponse {
                success: false,
                error: error_message,
                path,
                method,
            }),
        )
            .into_response();

        if let Some(detail) = detail {
            res.extensions_mut().insert(ErrorDetail(detail));
        }

        res
    }
}
