//! Unified service-layer error type for folio-server
//!
//! `ServiceError` bridges storage errors (`sqlx::Error`) and the API-layer
//! error (`AppError`) so handlers can use `?` on both.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};

/// Service-layer error
///
/// - `Db`: storage failure (logged, mapped to `STORAGE_ERROR` or `ALREADY_EXISTS`)
/// - `App`: business-rule error, passed through unchanged
#[derive(Debug)]
pub enum ServiceError {
    Db(sqlx::Error),
    App(AppError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e)
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) if is_unique_violation(&db_err) => {
                AppError::new(ErrorCode::AlreadyExists)
            }
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::new(ErrorCode::StorageError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Whether a storage error is a UNIQUE constraint violation
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

/// Map a slug UNIQUE violation to `SLUG_TAKEN`, anything else passes through
pub fn slug_conflict(e: sqlx::Error, slug: &str) -> ServiceError {
    if is_unique_violation(&e) {
        return AppError::new(ErrorCode::SlugTaken)
            .with_detail("slug", slug)
            .into();
    }
    e.into()
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;
