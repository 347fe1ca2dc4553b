//! Reorder board state
//!
//! Holds a local copy of the menu and tracks which rows differ from the last
//! persisted order. Nothing is sent until [`ReorderBoard::begin_save`].
//!
//! `pending_changes` is always recomputed from `items` vs `original_order`,
//! never set from a gesture, so dragging an item away and back clears it.

use shared::models::MenuItem;
use shared::request::{ReorderItem, ReorderRequest, ReorderResult};
use std::collections::BTreeSet;

/// Board lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    LoadFailed,
}

/// Row highlight, highest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    /// Current drop target
    Hovered,
    /// Position differs from the persisted order
    Changed,
    Normal,
}

/// Why a save did not go through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFailure {
    /// No response from the server
    Network,
    /// Server answered with a failure
    Rejected,
}

/// Transient message shown after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Saved { updated: usize },
    SaveFailed,
    NetworkError,
    LoadFailed,
}

impl Feedback {
    pub fn message(&self) -> String {
        match self {
            Feedback::Saved { updated } => format!("Order saved. {updated} items updated."),
            Feedback::SaveFailed => "Error saving. Try again.".to_string(),
            Feedback::NetworkError => "Could not reach the server.".to_string(),
            Feedback::LoadFailed => "Could not load the menu items.".to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Feedback::Saved { .. })
    }
}

#[derive(Debug, Clone)]
pub struct ReorderBoard {
    items: Vec<MenuItem>,
    original_order: Vec<i64>,
    dragged_index: Option<usize>,
    drop_target_index: Option<usize>,
    pending_changes: BTreeSet<i64>,
    save_in_flight: bool,
    /// Id sequence sent by the in-flight save
    submitted: Option<Vec<i64>>,
    phase: Phase,
    feedback: Option<Feedback>,
}

impl Default for ReorderBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ReorderBoard {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            original_order: Vec::new(),
            dragged_index: None,
            drop_target_index: None,
            pending_changes: BTreeSet::new(),
            save_in_flight: false,
            submitted: None,
            phase: Phase::Loading,
            feedback: None,
        }
    }

    // ── Events ──

    /// Full item list fetched (inactive items included)
    pub fn loaded(&mut self, items: Vec<MenuItem>) {
        self.original_order = items.iter().map(|item| item.id).collect();
        self.items = items;
        self.dragged_index = None;
        self.drop_target_index = None;
        self.pending_changes.clear();
        self.phase = Phase::Ready;
        self.feedback = None;
    }

    pub fn load_failed(&mut self) {
        self.items.clear();
        self.original_order.clear();
        self.pending_changes.clear();
        self.phase = Phase::LoadFailed;
        self.feedback = Some(Feedback::LoadFailed);
    }

    pub fn drag_start(&mut self, index: usize) {
        if index < self.items.len() {
            self.dragged_index = Some(index);
        }
    }

    /// Presentation hint only
    pub fn drag_over(&mut self, index: usize) {
        if index < self.items.len() {
            self.drop_target_index = Some(index);
        }
    }

    pub fn drag_leave(&mut self) {
        self.drop_target_index = None;
    }

    /// Move the dragged item to `target` (splice, not swap).
    ///
    /// Returns whether the list changed.
    pub fn drop(&mut self, target: usize) -> bool {
        let Some(from) = self.dragged_index else {
            return false;
        };
        if from == target || target >= self.items.len() {
            return false;
        }

        let item = self.items.remove(from);
        self.items.insert(target, item);
        for (index, item) in self.items.iter_mut().enumerate() {
            item.order = index as i32;
        }

        self.dragged_index = None;
        self.drop_target_index = None;
        self.recompute_pending();
        true
    }

    /// Drag finished or cancelled
    pub fn drag_end(&mut self) {
        self.dragged_index = None;
        self.drop_target_index = None;
    }

    /// Start a save. Returns the full ordering to submit, or `None` when
    /// there is nothing to save or a save is already running.
    pub fn begin_save(&mut self) -> Option<ReorderRequest> {
        if !self.can_save() {
            return None;
        }
        self.save_in_flight = true;
        self.feedback = None;
        self.submitted = Some(self.current_sequence());

        Some(ReorderRequest {
            items: self
                .items
                .iter()
                .map(|item| ReorderItem {
                    id: item.id,
                    order: item.order,
                })
                .collect(),
        })
    }

    pub fn save_succeeded(&mut self, result: ReorderResult) {
        self.save_in_flight = false;
        if let Some(sequence) = self.submitted.take() {
            self.original_order = sequence;
        }
        self.recompute_pending();
        self.feedback = Some(Feedback::Saved {
            updated: result.updated,
        });
    }

    /// Items and pending changes stay as they are so the user can retry
    pub fn save_failed(&mut self, failure: SaveFailure) {
        self.save_in_flight = false;
        self.submitted = None;
        self.feedback = Some(match failure {
            SaveFailure::Network => Feedback::NetworkError,
            SaveFailure::Rejected => Feedback::SaveFailed,
        });
    }

    pub fn clear_feedback(&mut self) {
        self.feedback = None;
    }

    // ── Queries ──

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn original_order(&self) -> &[i64] {
        &self.original_order
    }

    pub fn current_sequence(&self) -> Vec<i64> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn pending_changes(&self) -> &BTreeSet<i64> {
        &self.pending_changes
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.dragged_index
    }

    pub fn drop_target_index(&self) -> Option<usize> {
        self.drop_target_index
    }

    pub fn is_saving(&self) -> bool {
        self.save_in_flight
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Save button enabled
    pub fn can_save(&self) -> bool {
        !self.pending_changes.is_empty() && !self.save_in_flight
    }

    pub fn save_label(&self) -> String {
        if self.save_in_flight {
            return "Saving...".to_string();
        }
        match self.pending_changes.len() {
            0 => "No pending changes".to_string(),
            1 => "Save order (1 change)".to_string(),
            n => format!("Save order ({n} changes)"),
        }
    }

    pub fn row_state(&self, index: usize) -> RowState {
        if self.drop_target_index == Some(index) {
            return RowState::Hovered;
        }
        match self.items.get(index) {
            Some(item) if self.pending_changes.contains(&item.id) => RowState::Changed,
            _ => RowState::Normal,
        }
    }

    fn recompute_pending(&mut self) {
        self.pending_changes = self
            .items
            .iter()
            .enumerate()
            .filter(|(index, item)| self.original_order.get(*index) != Some(&item.id))
            .map(|(_, item)| item.id)
            .collect();
    }
}
