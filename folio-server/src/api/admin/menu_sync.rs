use axum::extract::State;
use shared::ApiResponse;
use shared::error::AppError;
use shared::request::SyncReport;

use crate::api::ApiResult;
use crate::menu::section_sync;
use crate::state::AppState;

/// POST /api/admin/menu/sync - mirror every section into the menu
pub async fn sync(State(state): State<AppState>) -> ApiResult<SyncReport> {
    let run = section_sync::sync_all(&state.pool)
        .await
        .map_err(AppError::from)?;
    Ok(ApiResponse::success(run.report))
}
