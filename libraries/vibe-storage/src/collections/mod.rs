use sqlx::SqlitePool;
use vibe_core::error::Result;

/// Names of the collection tables, excluding SQLite and migration bookkeeping
pub async fn list_names(pool: &SqlitePool) -> Result<Vec<String>> {
    let names = sqlx::query_scalar(
        r#"
        SELECT name FROM sqlite_master
        WHERE type = 'table'
          AND name NOT LIKE 'sqlite_%'
          AND name <> '_sqlx_migrations'
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(names)
}
