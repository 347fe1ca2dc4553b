//! Shared types for the Folio workspace
//!
//! Wire types used by both `folio-server` and `folio-client`: content models,
//! the reorder request/response DTOs, the unified error system and the
//! `{success, data}` response envelope.

pub mod error;
pub mod models;
pub mod request;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use request::{ReorderItem, ReorderRequest, ReorderResult, SyncReport};
