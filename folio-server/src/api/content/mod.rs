//! Public section content API

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/content/{slug}", get(handler::get_by_slug))
}
