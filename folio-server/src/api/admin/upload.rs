//! Image upload handler

use axum::extract::{Multipart, Path, State};
use shared::ApiResponse;
use shared::error::{AppError, ErrorCode};
use shared::request::UploadResult;

use crate::api::ApiResult;
use crate::state::AppState;

/// POST /api/admin/upload/{category} - multipart, field `file`
pub async fn upload(
    State(state): State<AppState>,
    Path(category): Path<String>,
    mut multipart: Multipart,
) -> ApiResult<UploadResult> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart request: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field
            .file_name()
            .map(|s| s.to_string())
            .ok_or_else(|| AppError::validation("No filename provided in file field"))?;
        let bytes = field.bytes().await.map_err(|e| {
            if e.status() == http::StatusCode::PAYLOAD_TOO_LARGE {
                AppError::new(ErrorCode::FileTooLarge)
            } else {
                AppError::validation(format!("Multipart error: {e}"))
            }
        })?;
        file = Some((file_name, bytes.to_vec()));
        break;
    }

    let (file_name, bytes) = file.ok_or_else(|| {
        AppError::validation("No 'file' field found. Field name must be 'file'")
    })?;

    let path = state
        .uploads
        .store(&category, &file_name, &bytes)
        .await
        .map_err(AppError::from)?;

    Ok(ApiResponse::success(UploadResult { path }))
}
