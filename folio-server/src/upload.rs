//! Upload collaborator
//!
//! Accepts an image file and returns the relative path it was stored under.
//! Files are written as `<root>/<category>/<uuid>.<ext>` and served read-only
//! under `/upload`. No image transformation happens here.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use shared::error::{AppError, ErrorCode};

/// Maximum accepted upload size (5 MiB)
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Accepted image extensions
pub const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "svg"];

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("file is too large ({0} bytes, max {MAX_FILE_SIZE})")]
    TooLarge(usize),

    #[error("invalid upload category: {0}")]
    InvalidCategory(String),

    #[error("empty file")]
    Empty,

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<UploadError> for AppError {
    fn from(e: UploadError) -> Self {
        let message = e.to_string();
        match e {
            UploadError::UnsupportedType(ext) => {
                AppError::with_message(ErrorCode::UnsupportedFileType, message)
                    .with_detail("extension", ext)
            }
            UploadError::TooLarge(_) => AppError::with_message(ErrorCode::FileTooLarge, message),
            UploadError::InvalidCategory(_) | UploadError::Empty => AppError::validation(message),
            UploadError::Io(io) => {
                tracing::error!(error = %io, "Upload write failed");
                AppError::storage("Failed to store uploaded file")
            }
        }
    }
}

/// Storage backend for uploaded files
#[async_trait]
pub trait UploadStore: Send + Sync {
    /// Store `bytes` under `category`, returning the public relative path
    async fn store(
        &self,
        category: &str,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<String, UploadError>;
}

/// Local disk store
#[derive(Debug, Clone)]
pub struct LocalUploadStore {
    root: PathBuf,
}

impl LocalUploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl UploadStore for LocalUploadStore {
    async fn store(
        &self,
        category: &str,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<String, UploadError> {
        let ext = validate_upload(category, original_name, bytes)?;

        let dir = self.root.join(category);
        tokio::fs::create_dir_all(&dir).await?;

        let file_name = format!("{}.{ext}", uuid::Uuid::new_v4());
        tokio::fs::write(dir.join(&file_name), bytes).await?;

        tracing::info!(category, file = %file_name, size = bytes.len(), "Stored upload");
        Ok(format!("upload/{category}/{file_name}"))
    }
}

/// Check category, size and extension. Returns the normalized extension.
pub fn validate_upload(
    category: &str,
    original_name: &str,
    bytes: &[u8],
) -> Result<String, UploadError> {
    if !shared::util::is_valid_slug(category) {
        return Err(UploadError::InvalidCategory(category.to_string()));
    }
    if bytes.is_empty() {
        return Err(UploadError::Empty);
    }
    if bytes.len() > MAX_FILE_SIZE {
        return Err(UploadError::TooLarge(bytes.len()));
    }

    let ext = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let is_image = mime_guess::from_ext(&ext)
        .first()
        .is_some_and(|m| m.type_() == mime_guess::mime::IMAGE);

    if !is_image || !SUPPORTED_FORMATS.contains(&ext.as_str()) {
        return Err(UploadError::UnsupportedType(ext));
    }
    Ok(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_upload() {
        assert_eq!(validate_upload("projects", "Shot.PNG", b"x").unwrap(), "png");
        assert!(matches!(
            validate_upload("projects", "notes.txt", b"x"),
            Err(UploadError::UnsupportedType(_))
        ));
        assert!(matches!(
            validate_upload("projects", "noext", b"x"),
            Err(UploadError::UnsupportedType(_))
        ));
        assert!(matches!(
            validate_upload("../etc", "a.png", b"x"),
            Err(UploadError::InvalidCategory(_))
        ));
        assert!(matches!(
            validate_upload("projects", "a.png", b""),
            Err(UploadError::Empty)
        ));
    }

    #[test]
    fn test_too_large() {
        let bytes = vec![0u8; MAX_FILE_SIZE + 1];
        let err = validate_upload("projects", "a.png", &bytes).unwrap_err();
        assert!(matches!(err, UploadError::TooLarge(_)));
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::FileTooLarge);
    }

    #[tokio::test]
    async fn test_local_store_writes_under_category() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalUploadStore::new(dir.path());

        let path = store.store("sections", "hero.webp", b"RIFF").await.unwrap();
        assert!(path.starts_with("upload/sections/"));
        assert!(path.ends_with(".webp"));

        let file_name = path.rsplit('/').next().unwrap();
        let on_disk = store.root().join("sections").join(file_name);
        assert_eq!(std::fs::read(on_disk).unwrap(), b"RIFF");
    }
}
