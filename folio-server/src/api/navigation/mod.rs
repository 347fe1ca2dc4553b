//! Navigation API
//!
//! Public menu and footer, plus the admin-only full menu and reorder endpoints.

mod handler;

use axum::{
    Router, middleware,
    routing::{get, patch},
};

use crate::auth::require_admin;
use crate::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    Router::new().nest("/api/navigation", routes(state))
}

fn routes(state: &AppState) -> Router<AppState> {
    let public_routes = Router::new()
        .route("/menu", get(handler::menu))
        .route("/footer", get(handler::footer));

    let admin_routes = Router::new()
        .route("/menu/all", get(handler::menu_all))
        .route("/menu/reorder", patch(handler::reorder))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    public_routes.merge(admin_routes)
}
