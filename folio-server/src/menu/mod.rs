//! Menu ordering
//!
//! - [`reorder`]: atomic application of a client-supplied ordering
//! - [`section_sync`]: keeps section-mirrored menu items in step with their section

pub mod reorder;
pub mod section_sync;

pub use reorder::{ReorderError, apply_order};
pub use section_sync::{SyncEntry, SyncError, SyncOutcome, SyncRun};
