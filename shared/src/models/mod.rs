//! Data models
//!
//! Shared between folio-server and folio-client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod admin;
pub mod footer_block;
pub mod menu_item;
pub mod project;
pub mod section;

// Re-exports
pub use admin::*;
pub use footer_block::*;
pub use menu_item::*;
pub use project::*;
pub use section::*;
