//! Application state for folio-server

use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::upload::{LocalUploadStore, UploadStore};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Admin session signing secret
    pub jwt_secret: String,
    /// Base for absolute image URLs in the public API
    pub public_base_url: String,
    /// Directory served under `/upload`
    pub upload_dir: PathBuf,
    /// Upload collaborator
    pub uploads: Arc<dyn UploadStore>,
}

impl AppState {
    /// Connect, migrate and wire collaborators from configuration
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = crate::db::connect(&config.database_url).await?;
        tracing::info!(database_url = %config.database_url, "Database ready");

        Ok(Self::from_parts(
            pool,
            config.jwt_secret.clone(),
            config.public_base_url.clone(),
            PathBuf::from(&config.upload_dir),
        ))
    }

    /// Build state around an existing pool (tests, maintenance tools)
    pub fn from_parts(
        pool: SqlitePool,
        jwt_secret: impl Into<String>,
        public_base_url: impl Into<String>,
        upload_dir: PathBuf,
    ) -> Self {
        let uploads: Arc<dyn UploadStore> = Arc::new(LocalUploadStore::new(upload_dir.clone()));
        Self {
            pool,
            jwt_secret: jwt_secret.into(),
            public_base_url: public_base_url.into(),
            upload_dir,
            uploads,
        }
    }
}
