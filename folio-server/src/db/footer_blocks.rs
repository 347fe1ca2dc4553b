//! Footer block database operations

use shared::models::{FooterBlock, FooterBlockCreate, FooterBlockUpdate, FooterItem};
use sqlx::SqlitePool;

/// Active entries for the public footer, grouped order
pub async fn list_active(pool: &SqlitePool) -> Result<Vec<FooterItem>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, group_name, label, url, icon, sort_order
        FROM footer_blocks
        WHERE is_active = 1
        ORDER BY group_name, sort_order, id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<FooterBlock>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, group_name, label, url, icon, sort_order, is_active, updated_at
        FROM footer_blocks
        ORDER BY group_name, sort_order, id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<FooterBlock>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, group_name, label, url, icon, sort_order, is_active, updated_at
        FROM footer_blocks
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create(
    pool: &SqlitePool,
    data: &FooterBlockCreate,
) -> Result<FooterBlock, sqlx::Error> {
    let now = shared::util::now_millis();
    let is_active = data.is_active.unwrap_or(true);
    let id = sqlx::query(
        r#"
        INSERT INTO footer_blocks (group_name, label, url, icon, sort_order, is_active, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&data.group)
    .bind(&data.label)
    .bind(&data.url)
    .bind(&data.icon)
    .bind(data.order)
    .bind(is_active)
    .bind(now)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(FooterBlock {
        id,
        group: data.group.clone(),
        label: data.label.clone(),
        url: data.url.clone(),
        icon: data.icon.clone(),
        order: data.order,
        is_active,
        updated_at: now,
    })
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &FooterBlockUpdate,
) -> Result<Option<FooterBlock>, sqlx::Error> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        r#"
        UPDATE footer_blocks SET
            group_name = COALESCE(?, group_name),
            label = COALESCE(?, label),
            url = COALESCE(?, url),
            icon = COALESCE(?, icon),
            sort_order = COALESCE(?, sort_order),
            is_active = COALESCE(?, is_active),
            updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&data.group)
    .bind(&data.label)
    .bind(&data.url)
    .bind(&data.icon)
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

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM footer_blocks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
