//! Mirror every section into the navigation menu.
//!
//! Usage: sync-menu

use folio_server::menu::section_sync::{self, SyncOutcome};
use folio_server::{Config, db, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    logger::init_logger("warn", false, None)?;

    let pool = db::connect(&config.database_url).await?;
    let run = section_sync::sync_all(&pool).await?;

    for entry in &run.entries {
        match entry.outcome {
            SyncOutcome::Created(id) => println!("  + created  #{id:<4} {} ({})", entry.title, entry.slug),
            SyncOutcome::Updated(id) => println!("  ~ updated  #{id:<4} {} ({})", entry.title, entry.slug),
        }
    }
    println!(
        "Menu sync complete: {} created, {} updated",
        run.report.created, run.report.updated
    );

    pool.close().await;
    Ok(())
}
