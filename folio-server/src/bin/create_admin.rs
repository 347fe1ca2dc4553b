//! Create an admin account, or reset its password.
//!
//! Usage: create-admin --email=<email> --password=<password>

use anyhow::{Context, bail};
use folio_server::auth::hash_password;
use folio_server::utils::validation::{MAX_EMAIL_LEN, MIN_PASSWORD_LEN};
use folio_server::{Config, db, logger};

struct Args {
    email: String,
    password: String,
}

fn parse_args(args: impl Iterator<Item = String>) -> anyhow::Result<Args> {
    let mut email = None;
    let mut password = None;
    for arg in args {
        if let Some(v) = arg.strip_prefix("--email=") {
            email = Some(v.trim().to_lowercase());
        } else if let Some(v) = arg.strip_prefix("--password=") {
            password = Some(v.to_string());
        }
    }

    let (Some(email), Some(password)) = (email, password) else {
        bail!("Usage: create-admin --email=<email> --password=<password>");
    };
    if email.is_empty() || email.len() > MAX_EMAIL_LEN || !email.contains('@') {
        bail!("Invalid email: {email}");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        bail!("Password must be at least {MIN_PASSWORD_LEN} characters");
    }
    Ok(Args { email, password })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let args = parse_args(std::env::args().skip(1))?;
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    logger::init_logger("warn", false, None)?;

    let pool = db::connect(&config.database_url).await?;
    let hash = hash_password(&args.password).context("hashing password")?;
    let admin = db::admins::upsert(&pool, &args.email, &hash).await?;

    println!("Admin ready: {} (id {})", admin.email, admin.id);
    pool.close().await;
    Ok(())
}
