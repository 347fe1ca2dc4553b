//! Project CRUD (stored image paths are returned as-is)

use axum::extract::{Path, State};
use shared::ApiResponse;
use shared::error::{AppError, ErrorCode};
use shared::models::{Project, ProjectCreate, ProjectUpdate};

use crate::api::ApiResult;
use crate::api::extract::ValidJson;
use crate::db::projects;
use crate::error::slug_conflict;
use crate::state::AppState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
    validate_slug,
};

fn project_not_found(id: i64) -> AppError {
    AppError::new(ErrorCode::ProjectNotFound).with_detail("id", id)
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Project>> {
    Ok(ApiResponse::success(projects::list(&state.pool).await?))
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Project> {
    let project = projects::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| project_not_found(id))?;
    Ok(ApiResponse::success(project))
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<ProjectCreate>,
) -> ApiResult<Project> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_slug(&payload.slug, "slug")?;
    if payload.short_description.len() > MAX_SHORT_TEXT_LEN {
        return Err(AppError::validation(format!(
            "short_description is too long (max {MAX_SHORT_TEXT_LEN})"
        ))
        .into());
    }
    validate_optional_text(&payload.live_url, "live_url", MAX_URL_LEN)?;

    let project = projects::create(&state.pool, &payload)
        .await
        .map_err(|e| slug_conflict(e, &payload.slug))?;
    tracing::info!(project_id = project.id, slug = %project.slug, "Project created");
    Ok(ApiResponse::success(project))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<ProjectUpdate>,
) -> ApiResult<Project> {
    if let Some(title) = &payload.title {
        validate_required_text(title, "title", MAX_NAME_LEN)?;
    }
    if let Some(slug) = &payload.slug {
        validate_slug(slug, "slug")?;
    }
    validate_optional_text(&payload.short_description, "short_description", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.live_url, "live_url", MAX_URL_LEN)?;

    let project = projects::update(&state.pool, id, &payload)
        .await
        .map_err(|e| slug_conflict(e, payload.slug.as_deref().unwrap_or_default()))?
        .ok_or_else(|| project_not_found(id))?;
    tracing::info!(project_id = id, "Project updated");
    Ok(ApiResponse::success(project))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<bool> {
    if !projects::delete(&state.pool, id).await? {
        return Err(project_not_found(id).into());
    }
    tracing::info!(project_id = id, "Project deleted");
    Ok(ApiResponse::success(true))
}
