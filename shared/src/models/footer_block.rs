//! Footer Block Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Footer entry (admin view)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct FooterBlock {
    pub id: i64,
    /// Category inside the footer (social, links, contact, legal, ...)
    #[cfg_attr(feature = "db", sqlx(rename = "group_name"))]
    pub group: String,
    pub label: String,
    pub url: Option<String>,
    pub icon: Option<String>,
    #[cfg_attr(feature = "db", sqlx(rename = "sort_order"))]
    pub order: i32,
    pub is_active: bool,
    pub updated_at: i64,
}

/// Public footer entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct FooterItem {
    pub id: i64,
    #[cfg_attr(feature = "db", sqlx(rename = "group_name"))]
    pub group: String,
    pub label: String,
    pub url: Option<String>,
    pub icon: Option<String>,
    #[cfg_attr(feature = "db", sqlx(rename = "sort_order"))]
    pub order: i32,
}

/// Public footer, keyed by group
pub type FooterGroups = BTreeMap<String, Vec<FooterItem>>;

/// Group footer items by their `group`, preserving input order within each group
pub fn group_footer_items(items: Vec<FooterItem>) -> FooterGroups {
    let mut groups = FooterGroups::new();
    for item in items {
        groups.entry(item.group.clone()).or_default().push(item);
    }
    groups
}

/// Create footer block payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterBlockCreate {
    pub group: String,
    pub label: String,
    pub url: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub order: i32,
    pub is_active: Option<bool>,
}

/// Update footer block payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FooterBlockUpdate {
    pub group: Option<String>,
    pub label: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}
