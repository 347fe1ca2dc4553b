//! Async driver for [`ReorderBoard`]

use async_trait::async_trait;
use shared::models::MenuItem;
use shared::request::{ReorderRequest, ReorderResult};

use super::board::{ReorderBoard, SaveFailure};
use crate::error::{ClientError, ClientResult};

/// Menu endpoints used by the reorder screen
#[async_trait]
pub trait MenuApi: Send + Sync {
    /// Every menu item, inactive included, in display order
    async fn fetch_all_menu_items(&self) -> ClientResult<Vec<MenuItem>>;

    /// Submit a full ordering
    async fn reorder_menu(&self, request: &ReorderRequest) -> ClientResult<ReorderResult>;
}

pub struct ReorderController<A: MenuApi> {
    api: A,
    board: ReorderBoard,
}

impl<A: MenuApi> ReorderController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            board: ReorderBoard::new(),
        }
    }

    pub fn board(&self) -> &ReorderBoard {
        &self.board
    }

    /// Drag events go straight to the board
    pub fn board_mut(&mut self) -> &mut ReorderBoard {
        &mut self.board
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the full list once. No automatic retry on failure.
    pub async fn load(&mut self) -> ClientResult<()> {
        match self.api.fetch_all_menu_items().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Menu items loaded");
                self.board.loaded(items);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to load menu items: {e}");
                self.board.load_failed();
                Err(e)
            }
        }
    }

    /// Submit the current order. `None` when the board had nothing to save.
    pub async fn save(&mut self) -> Option<ClientResult<ReorderResult>> {
        let request = self.board.begin_save()?;

        let result = self.api.reorder_menu(&request).await;
        match &result {
            Ok(outcome) => {
                tracing::info!(updated = outcome.updated, "Menu order saved");
                self.board.save_succeeded(*outcome);
            }
            Err(e) => {
                tracing::warn!("Failed to save menu order: {e}");
                let failure = match e {
                    ClientError::Network(_) => SaveFailure::Network,
                    _ => SaveFailure::Rejected,
                };
                self.board.save_failed(failure);
            }
        }
        Some(result)
    }
}
