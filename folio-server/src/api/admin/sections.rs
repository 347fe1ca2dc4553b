//! Section CRUD with menu reconciliation

use axum::extract::{Path, State};
use shared::ApiResponse;
use shared::error::{AppError, ErrorCode};
use shared::models::{
    Section, SectionCreate, SectionDeleteResult, SectionUpdate, SectionWriteResult,
};

use crate::api::ApiResult;
use crate::api::extract::ValidJson;
use crate::db::sections;
use crate::error::slug_conflict;
use crate::menu::section_sync::{self, MENU_SYNC_FAILED, SyncError, SyncOutcome};
use crate::state::AppState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text, validate_slug,
};

fn section_not_found(id: i64) -> AppError {
    AppError::new(ErrorCode::SectionNotFound).with_detail("id", id)
}

/// Log a failed reconcile and turn it into the `menu_sync_error` field
fn sync_error(slug: &str, result: Result<SyncOutcome, SyncError>) -> Option<String> {
    match result {
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(slug, error = %e, "Menu reconciliation failed, section change kept");
            Some(MENU_SYNC_FAILED.to_string())
        }
    }
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Section>> {
    Ok(ApiResponse::success(sections::list(&state.pool).await?))
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Section> {
    let section = sections::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| section_not_found(id))?;
    Ok(ApiResponse::success(section))
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<SectionCreate>,
) -> ApiResult<SectionWriteResult> {
    validate_slug(&payload.slug, "slug")?;
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&payload.image_url, "image_url", MAX_URL_LEN)?;

    let section = sections::create(&state.pool, &payload)
        .await
        .map_err(|e| slug_conflict(e, &payload.slug))?;
    tracing::info!(section_id = section.id, slug = %section.slug, "Section created");

    let result = section_sync::on_section_created(&state.pool, &section.slug, &section.title).await;
    let menu_sync_error = sync_error(&section.slug, result);

    Ok(ApiResponse::success(SectionWriteResult {
        section,
        menu_sync_error,
    }))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<SectionUpdate>,
) -> ApiResult<SectionWriteResult> {
    if let Some(slug) = &payload.slug {
        validate_slug(slug, "slug")?;
    }
    if let Some(title) = &payload.title {
        validate_required_text(title, "title", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.image_url, "image_url", MAX_URL_LEN)?;

    let previous = sections::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| section_not_found(id))?;

    let section = sections::update(&state.pool, id, &payload)
        .await
        .map_err(|e| slug_conflict(e, payload.slug.as_deref().unwrap_or_default()))?
        .ok_or_else(|| section_not_found(id))?;
    tracing::info!(section_id = id, slug = %section.slug, "Section updated");

    let result = section_sync::on_section_updated(
        &state.pool,
        &previous.slug,
        &section.slug,
        &section.title,
    )
    .await;
    let menu_sync_error = sync_error(&section.slug, result);

    Ok(ApiResponse::success(SectionWriteResult {
        section,
        menu_sync_error,
    }))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<SectionDeleteResult> {
    let section = sections::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| section_not_found(id))?;

    // Mirror first, the section stays if its cleanup fails
    let menu_items_removed = section_sync::on_section_deleted(&state.pool, &section.slug)
        .await
        .map_err(|e| {
            tracing::warn!(slug = %section.slug, error = %e, "Menu cleanup failed, section kept");
            AppError::from(e)
        })?;

    if !sections::delete(&state.pool, id).await? {
        return Err(section_not_found(id).into());
    }
    tracing::info!(section_id = id, slug = %section.slug, menu_items_removed, "Section deleted");

    Ok(ApiResponse::success(SectionDeleteResult {
        id,
        menu_items_removed,
    }))
}
