//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Input and lookup errors
    General,
    /// Admin session errors
    Auth,
    /// Content errors (sections, projects, menu, footer)
    Content,
    /// Upload errors
    Upload,
    /// Storage and infrastructure errors
    System,
}

impl ErrorCategory {
    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Content => "content",
            Self::Upload => "upload",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput | Self::ValidationFailed | Self::NotFound | Self::AlreadyExists => {
                ErrorCategory::General
            }
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenInvalid
            | Self::PasswordTooShort => ErrorCategory::Auth,
            Self::SectionNotFound
            | Self::ProjectNotFound
            | Self::MenuItemNotFound
            | Self::FooterBlockNotFound
            | Self::SlugTaken => ErrorCategory::Content,
            Self::UnsupportedFileType | Self::FileTooLarge => ErrorCategory::Upload,
            Self::InternalError | Self::StorageError | Self::ConfigError => ErrorCategory::System,
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_of_codes() {
        assert_eq!(ErrorCode::InvalidInput.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::TokenInvalid.category(), ErrorCategory::Auth);
        assert_eq!(ErrorCode::SlugTaken.category(), ErrorCategory::Content);
        assert_eq!(ErrorCode::FileTooLarge.category(), ErrorCategory::Upload);
        assert_eq!(ErrorCode::StorageError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&ErrorCategory::Content).unwrap();
        assert_eq!(json, "\"content\"");
    }
}
