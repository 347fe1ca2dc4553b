//! Unified error codes for Folio
//!
//! Codes travel on the wire as SCREAMING_SNAKE_CASE strings (`"INVALID_INPUT"`)
//! inside the failure envelope. They are grouped by category:
//! - General: input and lookup failures
//! - Auth: admin session failures
//! - Content: section / project / menu / footer failures
//! - Upload: file upload failures
//! - System: storage and infrastructure failures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unified error code enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ==================== General ====================
    /// Malformed or empty request body
    InvalidInput,
    /// Field-level validation failed
    ValidationFailed,
    /// Resource not found
    NotFound,
    /// Resource already exists (unique constraint)
    AlreadyExists,

    // ==================== Auth ====================
    /// No session presented
    NotAuthenticated,
    /// Invalid email/password pair
    InvalidCredentials,
    /// Session token could not be verified
    TokenInvalid,
    /// Password below the minimum length
    PasswordTooShort,

    // ==================== Content ====================
    /// Section not found
    SectionNotFound,
    /// Project not found
    ProjectNotFound,
    /// Menu item not found
    MenuItemNotFound,
    /// Footer block not found
    FooterBlockNotFound,
    /// Slug already used by another record
    SlugTaken,

    // ==================== Upload ====================
    /// File extension not accepted
    UnsupportedFileType,
    /// File exceeds the upload limit
    FileTooLarge,

    // ==================== System ====================
    /// Internal server error
    InternalError,
    /// Storage transaction aborted
    StorageError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// All codes, in declaration order
    pub const ALL: [ErrorCode; 18] = [
        ErrorCode::InvalidInput,
        ErrorCode::ValidationFailed,
        ErrorCode::NotFound,
        ErrorCode::AlreadyExists,
        ErrorCode::NotAuthenticated,
        ErrorCode::InvalidCredentials,
        ErrorCode::TokenInvalid,
        ErrorCode::PasswordTooShort,
        ErrorCode::SectionNotFound,
        ErrorCode::ProjectNotFound,
        ErrorCode::MenuItemNotFound,
        ErrorCode::FooterBlockNotFound,
        ErrorCode::SlugTaken,
        ErrorCode::UnsupportedFileType,
        ErrorCode::FileTooLarge,
        ErrorCode::InternalError,
        ErrorCode::StorageError,
        ErrorCode::ConfigError,
    ];

    /// Wire representation of the code
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::NotAuthenticated => "NOT_AUTHENTICATED",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::TokenInvalid => "TOKEN_INVALID",
            ErrorCode::PasswordTooShort => "PASSWORD_TOO_SHORT",
            ErrorCode::SectionNotFound => "SECTION_NOT_FOUND",
            ErrorCode::ProjectNotFound => "PROJECT_NOT_FOUND",
            ErrorCode::MenuItemNotFound => "MENU_ITEM_NOT_FOUND",
            ErrorCode::FooterBlockNotFound => "FOOTER_BLOCK_NOT_FOUND",
            ErrorCode::SlugTaken => "SLUG_TAKEN",
            ErrorCode::UnsupportedFileType => "UNSUPPORTED_FILE_TYPE",
            ErrorCode::FileTooLarge => "FILE_TOO_LARGE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Default human-readable message
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "Invalid input",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::NotAuthenticated => "Authentication required",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::TokenInvalid => "Session token is invalid or expired",
            ErrorCode::PasswordTooShort => "Password must be at least 8 characters",
            ErrorCode::SectionNotFound => "Section not found",
            ErrorCode::ProjectNotFound => "Project not found",
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::FooterBlockNotFound => "Footer block not found",
            ErrorCode::SlugTaken => "Slug is already in use",
            ErrorCode::UnsupportedFileType => "Unsupported file type",
            ErrorCode::FileTooLarge => "File is too large",
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StorageError => "Storage operation failed",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

/// Error when parsing an unknown code string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidErrorCode(pub String);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl FromStr for ErrorCode {
    type Err = InvalidErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| InvalidErrorCode(s.to_string()))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_uses_wire_string() {
        let json = serde_json::to_string(&ErrorCode::InvalidInput).unwrap();
        assert_eq!(json, "\"INVALID_INPUT\"");
        let json = serde_json::to_string(&ErrorCode::MenuItemNotFound).unwrap();
        assert_eq!(json, "\"MENU_ITEM_NOT_FOUND\"");
    }

    #[test]
    fn test_as_str_matches_serde() {
        for code in ErrorCode::ALL {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "STORAGE_ERROR".parse::<ErrorCode>().unwrap(),
            ErrorCode::StorageError
        );
        let err = "NOPE".parse::<ErrorCode>().unwrap_err();
        assert_eq!(err.to_string(), "invalid error code: NOPE");
    }

    #[test]
    fn test_deserialize_invalid() {
        assert!(serde_json::from_str::<ErrorCode>("\"NOPE\"").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::SlugTaken), "SLUG_TAKEN");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::SectionNotFound.message(), "Section not found");
        assert_eq!(ErrorCode::StorageError.message(), "Storage operation failed");
    }
}
