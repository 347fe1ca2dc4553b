use axum::Extension;
use axum::extract::State;
use shared::ApiResponse;
use shared::error::AppError;
use shared::models::{AdminInfo, LoginRequest, LoginResponse};

use crate::api::ApiResult;
use crate::api::extract::ValidJson;
use crate::auth::{CurrentAdmin, create_token, verify_password};
use crate::db::admins;
use crate::state::AppState;

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let email = req.email.trim().to_lowercase();

    let Some(admin) = admins::find_by_email(&state.pool, &email).await? else {
        tracing::warn!(email = %email, "Login failed: unknown admin");
        return Err(AppError::invalid_credentials().into());
    };

    if !verify_password(&req.password, &admin.password_hash) {
        tracing::warn!(admin_id = admin.id, "Login failed: wrong password");
        return Err(AppError::invalid_credentials().into());
    }

    let token = create_token(admin.id, &admin.email, &state.jwt_secret).map_err(AppError::from)?;
    tracing::info!(admin_id = admin.id, "Admin logged in");

    Ok(ApiResponse::success(LoginResponse {
        token,
        admin: AdminInfo::from(&admin),
    }))
}

/// GET /api/admin/me
pub async fn me(Extension(admin): Extension<CurrentAdmin>) -> ApiResult<AdminInfo> {
    Ok(ApiResponse::success(AdminInfo {
        id: admin.id,
        email: admin.email,
    }))
}
