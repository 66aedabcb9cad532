//! Environment-gated publication of internal error detail.
//!
//! Handlers and the panic catcher attach an [`ErrorDetail`] extension to
//! failing responses. [`error_detail_middleware`] turns it into the
//! envelope's `message` field: verbatim in development, a fixed phrase in
//! production.

use crate::error::{AppError, ErrorDetail};
use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use std::any::Any;

/// Body text used instead of real diagnostics in production.
pub const PRODUCTION_ERROR_MESSAGE: &str = "Something went wrong!";

/// Envelopes are tiny; anything larger is not ours to rewrite.
const MAX_ENVELOPE_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, Copy)]
pub struct DiagnosticMode {
    pub expose_details: bool,
}

impl DiagnosticMode {
    pub fn new(expose_details: bool) -> Self {
        Self { expose_details }
    }
}

pub async fn error_detail_middleware(
    State(mode): State<DiagnosticMode>,
    req: Request,
    next: Next,
) -> Response {
    let response = next.run(req).await;

    let Some(ErrorDetail(detail)) = response.extensions().get::<ErrorDetail>().cloned() else {
        return response;
    };

    let (mut parts, body) = response.into_parts();
    parts.extensions.remove::<ErrorDetail>();

    let mut envelope = match to_bytes(body, MAX_ENVELOPE_BYTES).await {
        Ok(bytes) => serde_json::from_slice::<Value>(&bytes)
            .unwrap_or_else(|_| json!({ "success": false })),
        Err(e) => {
            tracing::warn!("Failed to buffer error envelope: {}", e);
            json!({ "success": false })
        }
    };

    let message = if mode.expose_details {
        detail
    } else {
        PRODUCTION_ERROR_MESSAGE.to_string()
    };

    if let Some(object) = envelope.as_object_mut() {
        object.insert("message".to_string(), Value::String(message));
    }

    let bytes = match serde_json::to_vec(&envelope) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Failed to serialize error envelope: {}", e);
            return Response::from_parts(parts, Body::empty());
        }
    };

    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}

/// Handler for `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    AppError::InternalError(anyhow::anyhow!("handler panicked: {}", detail)).into_response()
}
