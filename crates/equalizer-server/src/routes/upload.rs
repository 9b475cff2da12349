//! Multipart upload handling shared by the file endpoints.

use axum::extract::Multipart;

use crate::error::ApiError;
use equalizer_intake::MediaKind;

/// One uploaded artifact.
#[derive(Debug)]
pub struct Upload {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Read the `file` field from a multipart request.
///
/// The filename is classified against the intake allow-list before the
/// field body is read, so disallowed artifact types are rejected without
/// buffering their bytes.
pub async fn read_upload(mut multipart: Multipart) -> Result<Upload, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| ApiError::bad_request("Uploaded file must have a filename"))?;

        // allow-list check happens before any bytes are read
        MediaKind::classify(&filename).map_err(ApiError::from)?;

        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {}", e)))?
            .to_vec();

        return Ok(Upload {
            filename,
            content_type,
            bytes,
        });
    }

    Err(ApiError::bad_request("Missing 'file' field"))
}
