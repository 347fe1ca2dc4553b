//! Project database operations
//!
//! `images` and `technologies` are stored as JSON text.

use shared::models::{Project, ProjectCreate, ProjectType, ProjectUpdate};
use sqlx::SqlitePool;
use sqlx::types::Json;

#[derive(Debug, sqlx::FromRow)]
struct ProjectRow {
    id: i64,
    created_at: i64,
    title: String,
    slug: String,
    project_type: ProjectType,
    short_description: String,
    content: String,
    images: Json<Vec<String>>,
    technologies: Json<Vec<String>>,
    live_url: Option<String>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            title: row.title,
            slug: row.slug,
            project_type: row.project_type,
            short_description: row.short_description,
            content: row.content,
            images: row.images.0,
            technologies: row.technologies.0,
            live_url: row.live_url,
        }
    }
}

/// Newest first
pub async fn list(pool: &SqlitePool) -> Result<Vec<Project>, sqlx::Error> {
    let rows: Vec<ProjectRow> = sqlx::query_as(
        r#"
        SELECT id, created_at, title, slug, project_type, short_description, content,
               images, technologies, live_url
        FROM projects
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(Project::from).collect())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Project>, sqlx::Error> {
    let row: Option<ProjectRow> = sqlx::query_as(
        r#"
        SELECT id, created_at, title, slug, project_type, short_description, content,
               images, technologies, live_url
        FROM projects
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(Project::from))
}

pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
    let row: Option<ProjectRow> = sqlx::query_as(
        r#"
        SELECT id, created_at, title, slug, project_type, short_description, content,
               images, technologies, live_url
        FROM projects
        WHERE slug = ?
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(Project::from))
}

pub async fn create(pool: &SqlitePool, data: &ProjectCreate) -> Result<Project, sqlx::Error> {
    let now = shared::util::now_millis();
    let id = sqlx::query(
        r#"
        INSERT INTO projects (
            created_at, title, slug, project_type, short_description, content,
            images, technologies, live_url
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(now)
    .bind(&data.title)
    .bind(&data.slug)
    .bind(data.project_type)
    .bind(&data.short_description)
    .bind(&data.content)
    .bind(Json(&data.images))
    .bind(Json(&data.technologies))
    .bind(&data.live_url)
    .execute(pool)
    .await?
    .last_insert_rowid();

    find_by_id(pool, id).await?.ok_or(sqlx::Error::RowNotFound)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &ProjectUpdate,
) -> Result<Option<Project>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        UPDATE projects SET
            title = COALESCE(?, title),
            slug = COALESCE(?, slug),
            project_type = COALESCE(?, project_type),
            short_description = COALESCE(?, short_description),
            content = COALESCE(?, content),
            images = COALESCE(?, images),
            technologies = COALESCE(?, technologies),
            live_url = COALESCE(?, live_url)
        WHERE id = ?
        "#,
    )
    .bind(&data.title)
    .bind(&data.slug)
    .bind(data.project_type)
    .bind(&data.short_description)
    .bind(&data.content)
    .bind(data.images.as_ref().map(Json))
    .bind(data.technologies.as_ref().map(Json))
    .bind(&data.live_url)
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
    let result = sqlx::query("DELETE FROM projects WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
