use crate::models::iso_timestamp;
use crate::models::upload::{UploadResponse, UploadedFile};
use crate::services::storage::generate_stored_name;
use crate::startup::AppState;
use axum::{
    extract::{
        multipart::{Field, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use chrono::Utc;
use service_core::error::AppError;

/// Largest accepted PDF.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Request body cap for the upload route: the file plus multipart framing.
pub const MAX_UPLOAD_BODY_BYTES: usize = MAX_UPLOAD_BYTES + 1024 * 1024;

/// Multipart field that carries the document.
const UPLOAD_FIELD: &str = "pdf";

const PDF_MIME_TYPE: &str = "application/pdf";

fn file_too_large() -> AppError {
    AppError::bad_request("File too large (max 10MB)")
}

fn no_file() -> AppError {
    AppError::bad_request("No PDF file uploaded")
}

fn is_pdf(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case(PDF_MIME_TYPE))
        .unwrap_or(false)
}

/// Read a field into memory, stopping as soon as it exceeds the cap.
async fn read_capped(field: &mut Field<'_>) -> Result<Vec<u8>, AppError> {
    let mut data = Vec::new();

    loop {
        let chunk = match field.chunk().await {
            Ok(Some(chunk)) => chunk,
            Ok(None) => break,
            Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => return Err(file_too_large()),
            Err(e) => {
                tracing::warn!("Failed to read upload body: {}", e);
                return Err(AppError::bad_request("Failed to read uploaded file"));
            }
        };

        if data.len() + chunk.len() > MAX_UPLOAD_BYTES {
            return Err(file_too_large());
        }
        data.extend_from_slice(&chunk);
    }

    Ok(data)
}

/// `POST /api/upload-pdf`: store a single PDF under a generated name.
///
/// Type and size are checked before anything touches disk. The bytes are
/// never parsed.
pub async fn upload_pdf(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!(%rejection, "Upload without multipart body");
        no_file()
    })?;

    loop {
        let mut field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(no_file()),
            Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => return Err(file_too_large()),
            Err(e) => {
                tracing::warn!("Malformed multipart body: {}", e);
                return Err(no_file());
            }
        };

        // Text parts, even one named `pdf`, are not files
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let Some(original_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let mime_type = field.content_type().unwrap_or_default().to_string();

        if !is_pdf(&mime_type) {
            tracing::info!(file_name = %original_name, mime_type = %mime_type, "Rejected non-PDF upload");
            return Err(AppError::bad_request("Only PDF files are allowed"));
        }

        let data = read_capped(&mut field).await?;
        let stored_name = generate_stored_name(&original_name);

        state
            .uploads
            .save(&stored_name, &data)
            .await
            .map_err(|e| AppError::Labeled {
                label: "Failed to upload PDF",
                source: anyhow::Error::new(e),
            })?;

        tracing::info!(
            file_name = %original_name,
            stored_as = %stored_name,
            size = data.len(),
            "PDF uploaded"
        );

        return Ok(Json(UploadResponse {
            success: true,
            message: format!("PDF \"{}\" uploaded successfully!", original_name),
            file: UploadedFile {
                filename: stored_name,
                originalname: original_name,
                size: data.len(),
                mimetype: mime_type,
            },
            upload_time: iso_timestamp(Utc::now()),
            note: "PDF stored. Content processing is not available yet.",
        }));
    }
}
