//! Manual menu item CRUD
//!
//! Items created here have no `source_slug`; edits never set one.

use axum::extract::{Path, State};
use shared::ApiResponse;
use shared::error::{AppError, ErrorCode};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};

use crate::api::ApiResult;
use crate::api::extract::ValidJson;
use crate::db::menu_items::{self, NewMenuItem};
use crate::state::AppState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};

fn menu_item_not_found(id: i64) -> AppError {
    AppError::new(ErrorCode::MenuItemNotFound).with_detail("id", id)
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<MenuItem>> {
    Ok(ApiResponse::success(menu_items::list_all(&state.pool).await?))
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<MenuItem> {
    let item = menu_items::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| menu_item_not_found(id))?;
    Ok(ApiResponse::success(item))
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<MenuItemCreate>,
) -> ApiResult<MenuItem> {
    validate_required_text(&payload.label, "label", MAX_NAME_LEN)?;
    validate_required_text(&payload.url, "url", MAX_URL_LEN)?;
    validate_optional_text(&payload.image_url, "image_url", MAX_URL_LEN)?;

    let order = match payload.order {
        Some(order) => order,
        None => menu_items::next_sort_order(&state.pool).await?,
    };

    let id = menu_items::insert(
        &state.pool,
        &NewMenuItem {
            label: payload.label,
            url: payload.url,
            image_url: payload.image_url,
            order,
            is_active: payload.is_active.unwrap_or(true),
            source_slug: None,
        },
    )
    .await?;
    tracing::info!(menu_item_id = id, order, "Menu item created");

    let item = menu_items::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| menu_item_not_found(id))?;
    Ok(ApiResponse::success(item))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<MenuItemUpdate>,
) -> ApiResult<MenuItem> {
    if let Some(label) = &payload.label {
        validate_required_text(label, "label", MAX_NAME_LEN)?;
    }
    if let Some(url) = &payload.url {
        validate_required_text(url, "url", MAX_URL_LEN)?;
    }
    validate_optional_text(&payload.image_url, "image_url", MAX_URL_LEN)?;

    let item = menu_items::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| menu_item_not_found(id))?;
    tracing::info!(menu_item_id = id, "Menu item updated");
    Ok(ApiResponse::success(item))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<bool> {
    if !menu_items::delete(&state.pool, id).await? {
        return Err(menu_item_not_found(id).into());
    }
    tracing::info!(menu_item_id = id, "Menu item deleted");
    Ok(ApiResponse::success(true))
}
