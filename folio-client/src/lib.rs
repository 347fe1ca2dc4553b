//! Folio admin client
//!
//! - [`HttpClient`]: reqwest client speaking the `{success, data}` envelope
//! - [`reorder`]: drag-and-drop menu reordering (pure board state plus an
//!   async controller over any [`MenuApi`])

pub mod config;
pub mod error;
pub mod http;
pub mod reorder;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use crate::http::HttpClient;
pub use reorder::{Feedback, MenuApi, ReorderBoard, ReorderController, RowState};

// Re-export shared types for convenience
pub use shared::models::{MenuItem, PublicMenuItem};
pub use shared::request::{ReorderItem, ReorderRequest, ReorderResult};
