//! folio-server: portfolio content API and back office
//!
//! - Public read API: projects, sections, navigation menu, footer
//! - Admin API: content CRUD, menu reorder, section-to-menu sync, uploads
//!
//! # Module structure
//!
//! ```text
//! folio-server
//! ├── api/       # HTTP routes and handlers
//! ├── auth/      # admin login, JWT, guard middleware
//! ├── db/        # SQLite access (one module per table)
//! ├── menu/      # reorder engine and section-sync reconciler
//! ├── upload     # upload collaborator
//! └── utils/     # validation helpers
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod menu;
pub mod state;
pub mod upload;
pub mod utils;

pub use api::build_app;
pub use config::Config;
pub use state::AppState;
