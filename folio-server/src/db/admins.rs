//! Admin account database operations

use shared::models::Admin;
use sqlx::SqlitePool;

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Admin>, sqlx::Error> {
    sqlx::query_as("SELECT id, email, password_hash FROM admins WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Create the account, or replace its password if the email already exists
pub async fn upsert(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
) -> Result<Admin, sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO admins (email, password_hash) VALUES (?, ?)
        ON CONFLICT (email) DO UPDATE SET password_hash = excluded.password_hash
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .execute(pool)
    .await?;

    find_by_email(pool, email)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}
