use axum::extract::{Path, State};
use shared::ApiResponse;
use shared::error::{AppError, ErrorCode};
use shared::models::{FooterBlock, FooterBlockCreate, FooterBlockUpdate};

use crate::api::ApiResult;
use crate::api::extract::ValidJson;
use crate::db::footer_blocks;
use crate::state::AppState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};

fn footer_block_not_found(id: i64) -> AppError {
    AppError::new(ErrorCode::FooterBlockNotFound).with_detail("id", id)
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<FooterBlock>> {
    Ok(ApiResponse::success(
        footer_blocks::list_all(&state.pool).await?,
    ))
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<FooterBlockCreate>,
) -> ApiResult<FooterBlock> {
    validate_required_text(&payload.group, "group", MAX_NAME_LEN)?;
    validate_required_text(&payload.label, "label", MAX_NAME_LEN)?;
    validate_optional_text(&payload.url, "url", MAX_URL_LEN)?;
    validate_optional_text(&payload.icon, "icon", MAX_SHORT_TEXT_LEN)?;

    let block = footer_blocks::create(&state.pool, &payload).await?;
    tracing::info!(footer_block_id = block.id, group = %block.group, "Footer block created");
    Ok(ApiResponse::success(block))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<FooterBlockUpdate>,
) -> ApiResult<FooterBlock> {
    if let Some(group) = &payload.group {
        validate_required_text(group, "group", MAX_NAME_LEN)?;
    }
    if let Some(label) = &payload.label {
        validate_required_text(label, "label", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.url, "url", MAX_URL_LEN)?;
    validate_optional_text(&payload.icon, "icon", MAX_SHORT_TEXT_LEN)?;

    let block = footer_blocks::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| footer_block_not_found(id))?;
    Ok(ApiResponse::success(block))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<bool> {
    if !footer_blocks::delete(&state.pool, id).await? {
        return Err(footer_block_not_found(id).into());
    }
    tracing::info!(footer_block_id = id, "Footer block deleted");
    Ok(ApiResponse::success(true))
}
