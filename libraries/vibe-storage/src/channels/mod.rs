use crate::documents;
use sqlx::SqlitePool;
use vibe_core::{
    error::Result, query::Filter, Channel, Collection, DocumentId, SeedOutcome, Stored,
};

/// Channels matching `filter`, oldest first
pub async fn find(
    pool: &SqlitePool,
    filter: &Filter,
    limit: usize,
) -> Result<Vec<Stored<Channel>>> {
    documents::find(pool, Collection::Channels, filter, limit).await
}

/// Add a channel
pub async fn create(pool: &SqlitePool, channel: &Channel) -> Result<DocumentId> {
    let id = documents::insert(pool, Collection::Channels, channel).await?;
    tracing::info!("Channel added: {} ({})", id, channel.name);
    Ok(id)
}

/// Insert `defaults` when the collection is empty.
///
/// Any existing channel, default or not, skips the whole seed. The count and
/// the inserts are not serialized against a concurrent seed.
pub async fn seed(pool: &SqlitePool, defaults: &[Channel]) -> Result<SeedOutcome> {
    if documents::count(pool, Collection::Channels).await? > 0 {
        tracing::debug!("Channels already seeded");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let mut tx = pool.begin().await?;
    for channel in defaults {
        documents::insert(&mut *tx, Collection::Channels, channel).await?;
    }
    tx.commit().await?;

    tracing::info!("Seeded {} default channels", defaults.len());
    Ok(SeedOutcome::Seeded(defaults.len()))
}
