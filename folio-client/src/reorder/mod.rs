//! Drag-and-drop menu reordering
//!
//! [`ReorderBoard`] is the pure state machine (one method per UI event).
//! [`ReorderController`] drives its load and save steps against a [`MenuApi`].

pub mod board;
pub mod controller;

pub use board::{Feedback, Phase, ReorderBoard, RowState, SaveFailure};
pub use controller::{MenuApi, ReorderController};
