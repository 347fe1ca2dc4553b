//! Admin session collaborator
//!
//! Email/password login issues a 24h HS256 token; `require_admin` guards
//! every admin route.

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{AdminClaims, CurrentAdmin, create_token, verify_token};
pub use middleware::require_admin;
pub use password::{hash_password, verify_password};

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing Authorization header")]
    MissingToken,

    #[error("invalid Authorization format")]
    MalformedHeader,

    #[error("invalid or expired token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("password hashing failed: {0}")]
    Hash(argon2::password_hash::Error),
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MissingToken => AppError::not_authenticated(),
            AuthError::MalformedHeader => AppError::invalid_token("Invalid Authorization format"),
            AuthError::InvalidToken(err) => {
                tracing::debug!("JWT validation failed: {err}");
                AppError::invalid_token("Invalid or expired token")
            }
            AuthError::Hash(err) => {
                tracing::error!("Password hashing failed: {err}");
                AppError::new(ErrorCode::InternalError)
            }
        }
    }
}
