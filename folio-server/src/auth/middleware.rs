//! Admin guard middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared::error::AppError;

use super::{AuthError, verify_token};
use crate::state::AppState;

/// Verify `Authorization: Bearer <token>` and attach [`super::CurrentAdmin`]
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let reject = |e: AuthError| AppError::from(e).into_response();

    let auth_header = request
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| reject(AuthError::MissingToken))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| reject(AuthError::MalformedHeader))?;

    let admin = verify_token(token, &state.jwt_secret).map_err(reject)?;
    tracing::debug!(admin_id = admin.id, "Admin request authenticated");

    request.extensions_mut().insert(admin);
    Ok(next.run(request).await)
}
