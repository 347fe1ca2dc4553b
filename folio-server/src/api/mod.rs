//! HTTP API
//!
//! Every endpoint answers with the `{success, data}` / `{success, error, message}`
//! envelope.

pub mod admin;
pub mod content;
pub mod extract;
pub mod health;
pub mod navigation;
pub mod projects;

use axum::Router;
use axum::routing::get;
use shared::ApiResponse;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServiceError;
use crate::state::AppState;

/// Handler result: success envelope or a rendered error envelope
pub type ApiResult<T> = Result<ApiResponse<T>, ServiceError>;

/// Build the full application router
pub fn build_app(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.upload_dir);

    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health_check))
        .merge(navigation::router(&state))
        .merge(content::router())
        .merge(projects::router())
        .merge(admin::router(&state))
        .nest_service("/upload", uploads)
        .fallback(health::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
