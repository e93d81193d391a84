//! `migration [up|down|fresh|status]` against the app's database.
//!
//! The database is taken from `DATABASE_URL` when set, otherwise from
//! `server.database` in `settings.toml` / `FINQUEST__SERVER__DATABASE__*`,
//! the same settings the `finquest` binary reads.

use config::{Config, ConfigError, Environment, File};
use sea_orm::Database;
use sea_orm_migration::prelude::*;
use serde::Deserialize;

const DEFAULT_URL: &str = "sqlite:./finquest.db?mode=rwc";

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
enum Store {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
struct Server {
    database: Store,
}

#[derive(Debug, Deserialize)]
struct Settings {
    server: Option<Server>,
}

fn configured_store(config: Config) -> Result<Option<Store>, ConfigError> {
    let settings: Settings = config.try_deserialize()?;
    Ok(settings.server.map(|server| server.database))
}

fn database_url(env_url: Option<String>, store: Option<Store>) -> String {
    match (env_url, store) {
        (Some(url), _) => url,
        (None, Some(Store::Sqlite(path))) => format!("sqlite:{path}?mode=rwc"),
        (None, Some(Store::Memory)) => "sqlite::memory:".to_string(),
        (None, None) => DEFAULT_URL.to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cmd = std::env::args().nth(1).unwrap_or_else(|| "up".to_string());

    let store = configured_store(
        Config::builder()
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::with_prefix("FINQUEST").separator("__"))
            .build()?,
    )?;
    let url = database_url(std::env::var("DATABASE_URL").ok(), store);
    if url == "sqlite::memory:" {
        eprintln!("settings point at an in-memory database; the app migrates it on start");
    }

    let db = Database::connect(&url).await?;

    match cmd.as_str() {
        "up" => migration::Migrator::up(&db, None).await?,
        "down" => migration::Migrator::down(&db, Some(1)).await?,
        "fresh" => migration::Migrator::fresh(&db).await?,
        "status" => migration::Migrator::status(&db).await?,
        other => {
            eprintln!("unknown command {other:?}; expected up, down, fresh or status");
            std::process::exit(2);
        }
    }

    Ok(())
}
