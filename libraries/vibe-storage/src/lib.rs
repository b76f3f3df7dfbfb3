//! Vibe Music Storage
//!
//! `SQLite` document store for the Vibe Music API.
//!
//! Each collection (songs, playlists, channels) is a table of JSON documents
//! keyed by a store-assigned UUID. Catalog filters from `vibe-core` are
//! compiled into `json_extract` predicates with bound parameters.
//!
//! # Architecture
//!
//! - **Documents**: generic find/insert/count over any collection
//! - **Vertical Slicing**: songs, playlists and channels own their queries
//! - **Gateway**: [`SqliteDocumentStore`] implements `vibe_core::DocumentStore`
//!
//! # Example
//!
//! ```rust,no_run
//! use vibe_core::{query::SONG_SEARCH, CatalogQuery, DocumentStore};
//! use vibe_storage::SqliteDocumentStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteDocumentStore::connect("sqlite://vibe.db", 5).await?;
//!
//! let query = CatalogQuery::new().with_text(Some("cold"));
//! let songs = store.find_songs(&query.filter(SONG_SEARCH), query.limit()).await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod documents;
mod error;
mod filter;

// Vertical slices
pub mod channels;
pub mod collections;
pub mod playlists;
pub mod songs;

pub use context::SqliteDocumentStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Called once at startup so every collection table exists.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://vibe.db>`)
/// * `max_connections` - upper bound on pooled connections
///
/// Every connection registers the `REGEXP` function used by catalog filters.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30))
        .with_regexp();

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!("Pool created");

    Ok(pool)
}
