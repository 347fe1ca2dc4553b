//! Project API Handlers
//!
//! Stored image paths are relative; the public API returns absolute URLs.

use axum::extract::{Path, State};
use shared::ApiResponse;
use shared::error::{AppError, ErrorCode};
use shared::models::Project;
use shared::util::absolute_url;

use crate::api::ApiResult;
use crate::db::projects;
use crate::state::AppState;

/// GET /api/projects - newest first
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Project>> {
    let list = projects::list(&state.pool)
        .await?
        .into_iter()
        .map(|p| with_absolute_images(p, &state.public_base_url))
        .collect();
    Ok(ApiResponse::success(list))
}

/// GET /api/projects/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Project> {
    let project = projects::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ProjectNotFound).with_detail("slug", slug))?;
    Ok(ApiResponse::success(with_absolute_images(
        project,
        &state.public_base_url,
    )))
}

fn with_absolute_images(mut project: Project, base: &str) -> Project {
    project.images = project
        .images
        .iter()
        .map(|path| absolute_url(base, path))
        .collect();
    project
}
