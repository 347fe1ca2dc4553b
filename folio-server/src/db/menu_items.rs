//! Menu item database operations (the Order Store)
//!
//! Canonical sequence is `ORDER BY sort_order, id`.

use shared::models::{MenuItem, MenuItemUpdate, PublicMenuItem};
use sqlx::{Sqlite, SqlitePool};

/// Row to insert (manual or mirrored)
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub label: String,
    pub url: String,
    pub image_url: Option<String>,
    pub order: i32,
    pub is_active: bool,
    pub source_slug: Option<String>,
}

// ── Read ──

pub async fn list_active(pool: &SqlitePool) -> Result<Vec<PublicMenuItem>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, label, url, image_url, sort_order
        FROM menu_items
        WHERE is_active = 1
        ORDER BY sort_order, id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<MenuItem>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, label, url, image_url, sort_order, is_active, source_slug, updated_at
        FROM menu_items
        ORDER BY sort_order, id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id<'e, E>(executor: E, id: i64) -> Result<Option<MenuItem>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        r#"
        SELECT id, label, url, image_url, sort_order, is_active, source_slug, updated_at
        FROM menu_items
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn find_by_source_slug<'e, E>(
    executor: E,
    slug: &str,
) -> Result<Option<MenuItem>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        r#"
        SELECT id, label, url, image_url, sort_order, is_active, source_slug, updated_at
        FROM menu_items
        WHERE source_slug = ?
        "#,
    )
    .bind(slug)
    .fetch_optional(executor)
    .await
}

pub async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM menu_items")
        .fetch_one(executor)
        .await?;
    Ok(count)
}

/// Position right after the current last item
pub async fn next_sort_order<'e, E>(executor: E) -> Result<i32, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let (max,): (Option<i32>,) = sqlx::query_as("SELECT MAX(sort_order) FROM menu_items")
        .fetch_one(executor)
        .await?;
    Ok(max.map_or(0, |m| m + 1))
}

// ── Write ──

pub async fn insert<'e, E>(executor: E, item: &NewMenuItem) -> Result<i64, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let now = shared::util::now_millis();
    let result = sqlx::query(
        r#"
        INSERT INTO menu_items (label, url, image_url, sort_order, is_active, source_slug, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&item.label)
    .bind(&item.url)
    .bind(&item.image_url)
    .bind(item.order)
    .bind(item.is_active)
    .bind(&item.source_slug)
    .bind(now)
    .execute(executor)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Administrative edit. Never touches `source_slug`.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &MenuItemUpdate,
) -> Result<Option<MenuItem>, sqlx::Error> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        r#"
        UPDATE menu_items SET
            label = COALESCE(?, label),
            url = COALESCE(?, url),
            image_url = COALESCE(?, image_url),
            sort_order = COALESCE(?, sort_order),
            is_active = COALESCE(?, is_active),
            updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&data.label)
    .bind(&data.url)
    .bind(&data.image_url)
    .bind(data.order)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?
    .rows_affected();

    if rows == 0 {
        return Ok(None);
    }
    find_by_id(pool, id).await
}

/// Set one row's position. Returns rows affected (0 = unknown id).
pub async fn update_sort_order<'e, E>(
    executor: E,
    id: i64,
    order: i32,
    now: i64,
) -> Result<u64, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("UPDATE menu_items SET sort_order = ?, updated_at = ? WHERE id = ?")
        .bind(order)
        .bind(now)
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

/// Rewrite the section-derived fields of a mirrored item. Position is kept.
pub async fn update_mirror<'e, E>(
    executor: E,
    id: i64,
    label: &str,
    url: &str,
    source_slug: &str,
) -> Result<u64, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let now = shared::util::now_millis();
    let result = sqlx::query(
        "UPDATE menu_items SET label = ?, url = ?, source_slug = ?, updated_at = ? WHERE id = ?",
    )
    .bind(label)
    .bind(url)
    .bind(source_slug)
    .bind(now)
    .bind(id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM menu_items WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete_by_source_slug<'e, E>(executor: E, slug: &str) -> Result<u64, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM menu_items WHERE source_slug = ?")
        .bind(slug)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
