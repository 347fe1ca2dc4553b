//! Reorder Engine
//!
//! Applies a full `(id, order)` list to the menu in one transaction. Either
//! every listed row gets its new position or none does. Only `sort_order`
//! (and `updated_at`) is written.
//!
//! Ids and order values are taken as submitted: no contiguity or uniqueness
//! check, and no version check. Two concurrent saves resolve as last write wins.

use shared::error::AppError;
use shared::request::{ReorderItem, ReorderResult};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::db::menu_items;

/// Message returned for malformed or empty reorder bodies
pub const INVALID_INPUT_MESSAGE: &str = "Expected a non-empty array of items with {id, order}.";

#[derive(Debug, Error)]
pub enum ReorderError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("menu item {0} not found")]
    NotFound(i64),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl From<ReorderError> for AppError {
    fn from(e: ReorderError) -> Self {
        match e {
            ReorderError::InvalidInput(msg) => AppError::invalid_input(msg),
            // The engine does not pre-validate ids, so an unknown id surfaces as an aborted batch
            ReorderError::NotFound(id) => {
                tracing::warn!(menu_item_id = id, "Reorder aborted: unknown menu item");
                AppError::storage(format!("Reorder aborted: menu item {id} not found"))
                    .with_detail("id", id)
            }
            ReorderError::Storage(err) => {
                tracing::error!(error = %err, "Reorder transaction failed");
                AppError::storage("Reorder transaction aborted")
            }
        }
    }
}

/// Apply `items` as one atomic batch. Returns the number of rows written.
pub async fn apply_order(
    pool: &SqlitePool,
    items: &[ReorderItem],
) -> Result<ReorderResult, ReorderError> {
    if items.is_empty() {
        return Err(ReorderError::InvalidInput(INVALID_INPUT_MESSAGE.to_string()));
    }

    let now = shared::util::now_millis();
    let mut tx = pool.begin().await?;

    for item in items {
        let rows = menu_items::update_sort_order(&mut *tx, item.id, item.order, now).await?;
        if rows == 0 {
            tx.rollback().await?;
            return Err(ReorderError::NotFound(item.id));
        }
    }

    tx.commit().await?;

    tracing::info!(updated = items.len(), "Menu reordered");
    Ok(ReorderResult {
        updated: items.len(),
    })
}
