//! Menu Item Model
//!
//! A navigation entry positioned by its `order` field. Items with a
//! `source_slug` are mirrored from a Section and kept in sync automatically.

use serde::{Deserialize, Serialize};

/// Menu item entity (full admin view)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub label: String,
    pub url: String,
    pub image_url: Option<String>,
    #[cfg_attr(feature = "db", sqlx(rename = "sort_order"))]
    pub order: i32,
    pub is_active: bool,
    /// Slug of the Section this item mirrors (None = manual item)
    pub source_slug: Option<String>,
    pub updated_at: i64,
}

impl MenuItem {
    /// Whether the item is managed by section sync
    pub fn is_synced(&self) -> bool {
        self.source_slug.is_some()
    }
}

/// Public menu entry (active items only, no admin fields)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PublicMenuItem {
    pub id: i64,
    pub label: String,
    pub url: String,
    pub image_url: Option<String>,
    #[cfg_attr(feature = "db", sqlx(rename = "sort_order"))]
    pub order: i32,
}

impl From<MenuItem> for PublicMenuItem {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            label: item.label,
            url: item.url,
            image_url: item.image_url,
            order: item.order,
        }
    }
}

/// Create menu item payload (manual items only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub label: String,
    pub url: String,
    pub image_url: Option<String>,
    /// Omitted = append after the last item
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub label: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}
