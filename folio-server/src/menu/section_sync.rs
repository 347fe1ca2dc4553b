//! Section-Sync Reconciler
//!
//! Each section owns at most one menu item, linked by `source_slug`. These
//! handlers run after the section write and never move an existing item:
//! `sort_order` is only set when a row is created (appended at the end).
//!
//! Callers treat failures as best-effort: they log and report them, but the
//! section change stays committed.

use shared::error::AppError;
use shared::request::SyncReport;
use shared::util::menu_url_for_slug;
use sqlx::{SqliteConnection, SqlitePool};
use thiserror::Error;

use crate::db::menu_items::{self, NewMenuItem};
use crate::db::sections;

/// Client-facing text for a failed reconcile. Details only go to the log.
pub const MENU_SYNC_FAILED: &str = "Menu item could not be updated for this section.";

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("menu sync failed: {0}")]
    Storage(#[from] sqlx::Error),
}

impl From<SyncError> for AppError {
    fn from(e: SyncError) -> Self {
        tracing::error!(error = %e, "Menu sync failed");
        AppError::storage(MENU_SYNC_FAILED)
    }
}

/// What a reconcile step did to the mirrored item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Created(i64),
    Updated(i64),
}

impl SyncOutcome {
    pub fn menu_item_id(&self) -> i64 {
        match self {
            SyncOutcome::Created(id) | SyncOutcome::Updated(id) => *id,
        }
    }
}

/// One section's result in a bulk sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncEntry {
    pub slug: String,
    pub title: String,
    pub outcome: SyncOutcome,
}

/// Bulk sync result
#[derive(Debug, Clone, Default)]
pub struct SyncRun {
    pub report: SyncReport,
    pub entries: Vec<SyncEntry>,
}

/// Mirror a newly created section. Re-running updates the existing item.
pub async fn on_section_created(
    pool: &SqlitePool,
    slug: &str,
    title: &str,
) -> Result<SyncOutcome, SyncError> {
    let mut tx = pool.begin().await?;
    let outcome = upsert_mirror(&mut tx, slug, title).await?;
    tx.commit().await?;

    tracing::debug!(slug, ?outcome, "Section mirrored into menu");
    Ok(outcome)
}

/// Follow a section edit (slug and/or title), keeping the item's position.
///
/// Sections that never had a mirrored item get one.
pub async fn on_section_updated(
    pool: &SqlitePool,
    old_slug: &str,
    new_slug: &str,
    new_title: &str,
) -> Result<SyncOutcome, SyncError> {
    let mut tx = pool.begin().await?;

    let outcome = match menu_items::find_by_source_slug(&mut *tx, old_slug).await? {
        Some(existing) => {
            let url = menu_url_for_slug(new_slug);
            menu_items::update_mirror(&mut *tx, existing.id, new_title, &url, new_slug).await?;
            SyncOutcome::Updated(existing.id)
        }
        None => {
            tracing::debug!(old_slug, new_slug, "No mirrored item found, creating one");
            upsert_mirror(&mut tx, new_slug, new_title).await?
        }
    };

    tx.commit().await?;
    Ok(outcome)
}

/// Remove every menu item mirrored from `slug`. Returns rows removed.
pub async fn on_section_deleted(pool: &SqlitePool, slug: &str) -> Result<u64, SyncError> {
    let removed = menu_items::delete_by_source_slug(pool, slug).await?;
    tracing::debug!(slug, removed, "Removed mirrored menu items");
    Ok(removed)
}

/// Reconcile every section into the menu in one transaction.
///
/// Missing items are created at the section's rank (sections by id). Existing
/// ones get their label and url refreshed. Manual items are left alone.
pub async fn sync_all(pool: &SqlitePool) -> Result<SyncRun, SyncError> {
    let all_sections = sections::list(pool).await?;
    let mut run = SyncRun::default();
    let mut tx = pool.begin().await?;

    for (rank, section) in all_sections.iter().enumerate() {
        let url = menu_url_for_slug(&section.slug);
        let outcome = match menu_items::find_by_source_slug(&mut *tx, &section.slug).await? {
            Some(existing) => {
                menu_items::update_mirror(&mut *tx, existing.id, &section.title, &url, &section.slug)
                    .await?;
                run.report.updated += 1;
                SyncOutcome::Updated(existing.id)
            }
            None => {
                let id = menu_items::insert(
                    &mut *tx,
                    &mirror_row(&section.slug, &section.title, rank as i32),
                )
                .await?;
                run.report.created += 1;
                SyncOutcome::Created(id)
            }
        };
        run.entries.push(SyncEntry {
            slug: section.slug.clone(),
            title: section.title.clone(),
            outcome,
        });
    }

    tx.commit().await?;

    tracing::info!(
        created = run.report.created,
        updated = run.report.updated,
        "Menu synced from sections"
    );
    Ok(run)
}

async fn upsert_mirror(
    conn: &mut SqliteConnection,
    slug: &str,
    title: &str,
) -> Result<SyncOutcome, sqlx::Error> {
    if let Some(existing) = menu_items::find_by_source_slug(&mut *conn, slug).await? {
        let url = menu_url_for_slug(slug);
        menu_items::update_mirror(&mut *conn, existing.id, title, &url, slug).await?;
        return Ok(SyncOutcome::Updated(existing.id));
    }

    let order = menu_items::count(&mut *conn).await? as i32;
    let id = menu_items::insert(&mut *conn, &mirror_row(slug, title, order)).await?;
    Ok(SyncOutcome::Created(id))
}

fn mirror_row(slug: &str, title: &str, order: i32) -> NewMenuItem {
    NewMenuItem {
        label: title.to_string(),
        url: menu_url_for_slug(slug),
        image_url: None,
        order,
        is_active: true,
        source_slug: Some(slug.to_string()),
    }
}
