//! Admin API
//!
//! Back-office CRUD. Everything except `/login` requires an admin session.
//!
//! Section creates and updates run the menu reconciler afterwards; its
//! failures are reported in `menu_sync_error` and never undo the section
//! change. Deletes remove the mirrored menu item first and stop if that fails.

mod auth;
mod footer_blocks;
mod menu_items;
mod menu_sync;
mod projects;
mod sections;
mod upload;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};

use crate::auth::require_admin;
use crate::state::AppState;
use crate::upload::MAX_FILE_SIZE;

pub fn router(state: &AppState) -> Router<AppState> {
    Router::new().nest("/api/admin", routes(state))
}

fn routes(state: &AppState) -> Router<AppState> {
    let public_routes = Router::new().route("/login", post(auth::login));

    let protected_routes = Router::new()
        .route("/me", get(auth::me))
        // Sections
        .route("/sections", get(sections::list).post(sections::create))
        .route(
            "/sections/{id}",
            get(sections::get_by_id)
                .put(sections::update)
                .delete(sections::delete),
        )
        // Menu items
        .route("/menu-items", get(menu_items::list).post(menu_items::create))
        .route(
            "/menu-items/{id}",
            get(menu_items::get_by_id)
                .put(menu_items::update)
                .delete(menu_items::delete),
        )
        .route("/menu/sync", post(menu_sync::sync))
        // Footer
        .route(
            "/footer-blocks",
            get(footer_blocks::list).post(footer_blocks::create),
        )
        .route(
            "/footer-blocks/{id}",
            axum::routing::put(footer_blocks::update).delete(footer_blocks::delete),
        )
        // Projects
        .route("/projects", get(projects::list).post(projects::create))
        .route(
            "/projects/{id}",
            get(projects::get_by_id)
                .put(projects::update)
                .delete(projects::delete),
        )
        // Upload (multipart; headroom over the file limit for form overhead)
        .route(
            "/upload/{category}",
            post(upload::upload).layer(DefaultBodyLimit::max(MAX_FILE_SIZE + 64 * 1024)),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    public_routes.merge(protected_routes)
}
