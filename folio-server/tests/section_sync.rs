mod common;

use common::seed_item;
use folio_server::db::{self, menu_items};
use folio_server::menu::SyncOutcome;
use folio_server::menu::section_sync::{
    on_section_created, on_section_deleted, on_section_updated, sync_all,
};
use shared::models::SectionCreate;

async fn mirrored_count(pool: &sqlx::SqlitePool, slug: &str) -> usize {
    menu_items::list_all(pool)
        .await
        .unwrap()
        .iter()
        .filter(|item| item.source_slug.as_deref() == Some(slug))
        .count()
}

#[tokio::test]
async fn test_created_twice_yields_one_item() {
    let pool = db::connect_in_memory().await.unwrap();

    let first = on_section_created(&pool, "x", "T").await.unwrap();
    let second = on_section_created(&pool, "x", "T").await.unwrap();

    assert!(matches!(first, SyncOutcome::Created(_)));
    assert_eq!(second, SyncOutcome::Updated(first.menu_item_id()));
    assert_eq!(mirrored_count(&pool, "x").await, 1);
}

#[tokio::test]
async fn test_created_item_is_appended_with_derived_fields() {
    let pool = db::connect_in_memory().await.unwrap();
    seed_item(&pool, "Home", 0, true).await;
    seed_item(&pool, "Blog", 1, true).await;

    let outcome = on_section_created(&pool, "about-me", "About me").await.unwrap();
    let item = menu_items::find_by_id(&pool, outcome.menu_item_id())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(item.order, 2);
    assert_eq!(item.label, "About me");
    assert_eq!(item.url, "/about-me");
    assert_eq!(item.source_slug.as_deref(), Some("about-me"));
    assert!(item.is_active);
}

#[tokio::test]
async fn test_deleted_removes_mirrored_item() {
    let pool = db::connect_in_memory().await.unwrap();
    on_section_created(&pool, "x", "T").await.unwrap();
    let manual = seed_item(&pool, "Home", 5, true).await;

    let removed = on_section_deleted(&pool, "x").await.unwrap();
    assert_eq!(removed, 1);
    assert_eq!(mirrored_count(&pool, "x").await, 0);
    assert!(menu_items::find_by_id(&pool, manual).await.unwrap().is_some());

    // Nothing left to remove
    assert_eq!(on_section_deleted(&pool, "x").await.unwrap(), 0);
}

#[tokio::test]
async fn test_rename_preserves_position() {
    let pool = db::connect_in_memory().await.unwrap();
    let created = on_section_created(&pool, "old", "Old").await.unwrap();
    let id = created.menu_item_id();
    menu_items::update_sort_order(&pool, id, 7, 0).await.unwrap();

    let outcome = on_section_updated(&pool, "old", "new", "New").await.unwrap();
    assert_eq!(outcome, SyncOutcome::Updated(id));

    let item = menu_items::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(item.order, 7);
    assert_eq!(item.label, "New");
    assert_eq!(item.url, "/new");
    assert_eq!(item.source_slug.as_deref(), Some("new"));
    assert_eq!(mirrored_count(&pool, "old").await, 0);
}

#[tokio::test]
async fn test_update_without_mirror_creates_one() {
    let pool = db::connect_in_memory().await.unwrap();
    seed_item(&pool, "Home", 0, true).await;

    let outcome = on_section_updated(&pool, "legacy", "legacy-renamed", "Legacy")
        .await
        .unwrap();
    assert!(matches!(outcome, SyncOutcome::Created(_)));

    let item = menu_items::find_by_id(&pool, outcome.menu_item_id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(item.source_slug.as_deref(), Some("legacy-renamed"));
    assert_eq!(item.order, 1);
}

#[tokio::test]
async fn test_rename_onto_taken_slug_fails() {
    let pool = db::connect_in_memory().await.unwrap();
    on_section_created(&pool, "a", "A").await.unwrap();
    on_section_created(&pool, "b", "B").await.unwrap();

    assert!(on_section_updated(&pool, "a", "b", "A").await.is_err());
    // Failed step leaves both mirrors intact
    assert_eq!(mirrored_count(&pool, "a").await, 1);
    assert_eq!(mirrored_count(&pool, "b").await, 1);
}

#[tokio::test]
async fn test_sync_all_creates_missing_and_refreshes_existing() {
    let pool = db::connect_in_memory().await.unwrap();
    for (slug, title) in [("about", "About"), ("work", "Work"), ("contact", "Contact")] {
        db::sections::create(
            &pool,
            &SectionCreate {
                slug: slug.to_string(),
                title: title.to_string(),
                body: String::new(),
                image_url: None,
            },
        )
        .await
        .unwrap();
    }
    // "work" already mirrored with a stale label, plus one manual item
    let existing = on_section_created(&pool, "work", "Old work").await.unwrap();
    let manual = seed_item(&pool, "Blog", 9, true).await;

    let run = sync_all(&pool).await.unwrap();
    assert_eq!(run.report.created, 2);
    assert_eq!(run.report.updated, 1);
    assert_eq!(run.entries.len(), 3);

    let work = menu_items::find_by_id(&pool, existing.menu_item_id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(work.label, "Work");

    let about = menu_items::find_by_source_slug(&pool, "about")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(about.order, 0);
    let contact = menu_items::find_by_source_slug(&pool, "contact")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(contact.order, 2);

    let blog = menu_items::find_by_id(&pool, manual).await.unwrap().unwrap();
    assert_eq!(blog.order, 9);
    assert!(blog.source_slug.is_none());

    // Second run only refreshes
    let rerun = sync_all(&pool).await.unwrap();
    assert_eq!(rerun.report.created, 0);
    assert_eq!(rerun.report.updated, 3);
}
