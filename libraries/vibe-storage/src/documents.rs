/// Generic document operations shared by every collection
use crate::filter::{push_filter, sql_limit};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::{QueryBuilder, Row, Sqlite, SqliteExecutor, SqlitePool};
use vibe_core::{error::Result, query::Filter, Collection, DocumentId, Stored};

/// Documents matching `filter`, oldest first
pub(crate) async fn find<T: DeserializeOwned>(
    pool: &SqlitePool,
    collection: Collection,
    filter: &Filter,
    limit: usize,
) -> Result<Vec<Stored<T>>> {
    let mut builder = QueryBuilder::<Sqlite>::new("SELECT id, document FROM ");
    builder.push(collection.name());
    builder.push(" WHERE ");
    push_filter(&mut builder, filter);
    builder.push(" ORDER BY rowid LIMIT ");
    builder.push_bind(sql_limit(limit));

    let rows = builder.build().fetch_all(pool).await?;

    rows.into_iter()
        .map(|row| -> Result<Stored<T>> {
            let id: DocumentId = row.try_get("id")?;
            let document: String = row.try_get("document")?;
            Ok(Stored::new(id, serde_json::from_str(&document)?))
        })
        .collect()
}

/// Insert a document under a freshly generated identifier
pub(crate) async fn insert<'e, E, T>(
    executor: E,
    collection: Collection,
    record: &T,
) -> Result<DocumentId>
where
    E: SqliteExecutor<'e>,
    T: Serialize,
{
    let id = DocumentId::generate();
    let document = serde_json::to_string(record)?;

    let sql = format!(
        "INSERT INTO {} (id, document) VALUES (?, ?)",
        collection.name()
    );
    sqlx::query(&sql)
        .bind(&id)
        .bind(document)
        .execute(executor)
        .await?;

    Ok(id)
}

/// Number of documents in a collection
pub(crate) async fn count<'e, E>(executor: E, collection: Collection) -> Result<u64>
where
    E: SqliteExecutor<'e>,
{
    let sql = format!("SELECT COUNT(*) FROM {}", collection.name());
    let count: i64 = sqlx::query_scalar(&sql).fetch_one(executor).await?;
    Ok(count.max(0) as u64)
}
