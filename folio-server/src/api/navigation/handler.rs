//! Navigation API Handlers

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use shared::ApiResponse;
use shared::models::{FooterGroups, MenuItem, PublicMenuItem, group_footer_items};
use shared::request::{ReorderRequest, ReorderResult};

use crate::api::ApiResult;
use crate::db::{footer_blocks, menu_items};
use crate::menu::reorder::{self, INVALID_INPUT_MESSAGE, ReorderError};
use crate::state::AppState;

/// GET /api/navigation/menu - active items, ascending order
pub async fn menu(State(state): State<AppState>) -> ApiResult<Vec<PublicMenuItem>> {
    let items = menu_items::list_active(&state.pool).await?;
    Ok(ApiResponse::success(items))
}

/// GET /api/navigation/footer - active entries keyed by group
pub async fn footer(State(state): State<AppState>) -> ApiResult<FooterGroups> {
    let items = footer_blocks::list_active(&state.pool).await?;
    Ok(ApiResponse::success(group_footer_items(items)))
}

/// GET /api/navigation/menu/all - every item, inactive included
pub async fn menu_all(State(state): State<AppState>) -> ApiResult<Vec<MenuItem>> {
    let items = menu_items::list_all(&state.pool).await?;
    Ok(ApiResponse::success(items))
}

/// PATCH /api/navigation/menu/reorder - apply a full ordering atomically
pub async fn reorder(
    State(state): State<AppState>,
    payload: Result<Json<ReorderRequest>, JsonRejection>,
) -> ApiResult<ReorderResult> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "Rejected reorder body");
        shared::AppError::from(ReorderError::InvalidInput(INVALID_INPUT_MESSAGE.to_string()))
            .with_detail("reason", rejection.body_text())
    })?;

    let result = reorder::apply_order(&state.pool, &request.items)
        .await
        .map_err(shared::AppError::from)?;
    Ok(ApiResponse::success(result))
}
