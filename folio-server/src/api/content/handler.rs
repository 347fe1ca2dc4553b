//! Section content handler

use axum::extract::{Path, State};
use shared::ApiResponse;
use shared::error::{AppError, ErrorCode};
use shared::models::Section;

use crate::api::ApiResult;
use crate::db::sections;
use crate::state::AppState;

/// GET /api/content/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Section> {
    let section = sections::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::SectionNotFound).with_detail("slug", slug))?;
    Ok(ApiResponse::success(section))
}
