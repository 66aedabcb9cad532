use serde::Serialize;

/// Metadata returned for a stored upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedFile {
    /// Generated on-disk name.
    pub filename: String,
    /// Name supplied by the client.
    pub originalname: String,
    pub size: usize,
    pub mimetype: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub file: UploadedFile,
    pub upload_time: String,
    pub note: &'static str,
}
