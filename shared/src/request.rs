//! Request types for the shared crate
//!
//! Payloads exchanged by folio-server and folio-client outside the entity models

use serde::{Deserialize, Serialize};

/// One element of a reorder submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderItem {
    pub id: i64,
    pub order: i32,
}

/// Reorder request body
///
/// Only the ids listed are touched. Duplicate `order` values are stored
/// as given; ties fall back to id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub items: Vec<ReorderItem>,
}

impl ReorderRequest {
    /// Build a full reorder payload from a display sequence (position = order)
    pub fn from_sequence(ids: &[i64]) -> Self {
        Self {
            items: ids
                .iter()
                .enumerate()
                .map(|(index, id)| ReorderItem {
                    id: *id,
                    order: index as i32,
                })
                .collect(),
        }
    }
}

/// Reorder response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderResult {
    pub updated: usize,
}

/// Bulk section-to-menu sync report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub created: usize,
    pub updated: usize,
}

/// Upload response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    /// Relative path, served under `/upload`
    pub path: String,
}
