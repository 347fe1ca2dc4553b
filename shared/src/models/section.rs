//! Section Model

use serde::{Deserialize, Serialize};

/// Content section (source of mirrored menu items)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Section {
    pub id: i64,
    pub slug: String,
    pub title: String,
    /// Rich text (HTML), stored as-is
    pub body: String,
    pub image_url: Option<String>,
    pub updated_at: i64,
}

/// Create section payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionCreate {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub image_url: Option<String>,
}

/// Update section payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionUpdate {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<String>,
}

/// Result of a section write
///
/// `menu_sync_error` carries the reason the mirrored menu item could not be
/// written. The section change itself is kept either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionWriteResult {
    pub section: Section,
    pub menu_sync_error: Option<String>,
}

/// Result of a section delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDeleteResult {
    pub id: i64,
    /// Mirrored menu items removed with the section
    pub menu_items_removed: u64,
}
