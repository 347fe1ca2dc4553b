//! Project Model

use serde::{Deserialize, Serialize};

/// Project kind
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ProjectType {
    #[default]
    Development,
    Design,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Development => "development",
            ProjectType::Design => "design",
        }
    }
}

/// Portfolio project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    /// Creation time (Unix millis)
    pub created_at: i64,
    pub title: String,
    pub slug: String,
    pub project_type: ProjectType,
    pub short_description: String,
    /// Rich text (HTML), stored as-is
    pub content: String,
    /// Image paths (relative in storage, absolute in the public API)
    pub images: Vec<String>,
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
}

/// Create project payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreate {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub project_type: ProjectType,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
}

/// Update project payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub project_type: Option<ProjectType>,
    pub short_description: Option<String>,
    pub content: Option<String>,
    pub images: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub live_url: Option<String>,
}
