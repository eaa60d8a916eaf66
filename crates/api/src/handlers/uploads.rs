//! Multipart image upload and best-effort file cleanup.
//!
//! Uploaded files land in the configured upload directory under a UUID
//! file name and are referenced everywhere else by their public
//! `/uploads/<name>` path.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Supported image file extensions for upload.
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "svg"];

/// Hard cap on the raw multipart body. The configured per-file limit is
/// enforced in the handler; this only bounds what axum buffers.
pub const UPLOAD_BODY_LIMIT_BYTES: usize = 32 * 1024 * 1024;

/// Successful upload payload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Public path, e.g. `/uploads/3f2a....png`.
    pub path: String,
}

/// POST /api/v1/admin/uploads
///
/// Accepts a single `file` field; other fields are ignored.
pub async fn upload(
    _admin: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file_data = Some((filename, data.to_vec()));
            }
            _ => {} // ignore unknown fields
        }
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }
    if data.len() > state.config.max_upload_bytes {
        return Err(AppError::BadRequest(format!(
            "File exceeds maximum upload size of {} bytes",
            state.config.max_upload_bytes
        )));
    }

    // Validate file extension
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();
    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unsupported file extension '{ext}'. Supported: {}",
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }

    let stored_name = format!("{}.{ext}", Uuid::new_v4());
    let dest = state.config.upload_dir.join(&stored_name);

    tokio::fs::create_dir_all(&state.config.upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;
    tokio::fs::write(&dest, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    let path = format!("/uploads/{stored_name}");
    tracing::info!(%path, bytes = data.len(), "File uploaded");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadResponse { path },
        }),
    ))
}

/// Best-effort removal of a previously uploaded file.
///
/// Called after a record referencing the file has been deleted. Failure is
/// logged and swallowed; it never blocks or fails the record deletion.
/// Paths outside `/uploads/` are left alone.
pub async fn cleanup_upload(config: &ServerConfig, image_path: &str) {
    let Some(file_name) = image_path.strip_prefix("/uploads/") else {
        return;
    };
    if file_name.is_empty() || file_name.contains('/') || file_name.contains("..") {
        return;
    }

    let disk_path = config.upload_dir.join(file_name);
    if let Err(e) = tokio::fs::remove_file(&disk_path).await {
        tracing::warn!(path = %disk_path.display(), error = %e, "Failed to remove uploaded file");
    }
}
