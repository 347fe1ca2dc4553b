//! Section database operations

use shared::models::{Section, SectionCreate, SectionUpdate};
use sqlx::SqlitePool;

pub async fn list(pool: &SqlitePool) -> Result<Vec<Section>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, slug, title, body, image_url, updated_at FROM sections ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Section>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, slug, title, body, image_url, updated_at FROM sections WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Section>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, slug, title, body, image_url, updated_at FROM sections WHERE slug = ?",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await
}

pub async fn create(pool: &SqlitePool, data: &SectionCreate) -> Result<Section, sqlx::Error> {
    let now = shared::util::now_millis();
    let id = sqlx::query(
        "INSERT INTO sections (slug, title, body, image_url, updated_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&data.slug)
    .bind(&data.title)
    .bind(&data.body)
    .bind(&data.image_url)
    .bind(now)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(Section {
        id,
        slug: data.slug.clone(),
        title: data.title.clone(),
        body: data.body.clone(),
        image_url: data.image_url.clone(),
        updated_at: now,
    })
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &SectionUpdate,
) -> Result<Option<Section>, sqlx::Error> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        r#"
        UPDATE sections SET
            slug = COALESCE(?, slug),
            title = COALESCE(?, title),
            body = COALESCE(?, body),
            image_url = COALESCE(?, image_url),
            updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&data.slug)
    .bind(&data.title)
    .bind(&data.body)
    .bind(&data.image_url)
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
    let result = sqlx::query("DELETE FROM sections WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
