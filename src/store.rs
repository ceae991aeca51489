//! SQLite connection setup and table DDL for `usuario`, `post` and `comentario`.

use crate::config::AppConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const TABLES: &[(&str, &str)] = &[
    (
        "usuario",
        r#"
        CREATE TABLE IF NOT EXISTS usuario (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome VARCHAR(100) NOT NULL,
            email VARCHAR(100) NOT NULL UNIQUE
        )
        "#,
    ),
    (
        "post",
        r#"
        CREATE TABLE IF NOT EXISTS post (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            titulo VARCHAR(100) NOT NULL,
            conteudo TEXT NOT NULL,
            usuario_id INTEGER NOT NULL REFERENCES usuario(id) ON DELETE CASCADE
        )
        "#,
    ),
    (
        "comentario",
        r#"
        CREATE TABLE IF NOT EXISTS comentario (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            conteudo TEXT NOT NULL,
            usuario_id INTEGER NOT NULL REFERENCES usuario(id) ON DELETE CASCADE,
            post_id INTEGER NOT NULL REFERENCES post(id) ON DELETE CASCADE
        )
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS ix_post_usuario_id ON post (usuario_id)",
    "CREATE INDEX IF NOT EXISTS ix_comentario_usuario_id ON comentario (usuario_id)",
    "CREATE INDEX IF NOT EXISTS ix_comentario_post_id ON comentario (post_id)",
];

/// Open a pool on `config.database_url`, creating the file if needed. Foreign keys are enforced on every connection.
pub async fn connect(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await
}

/// Single-connection in-memory pool. The connection is never recycled, so the database lives as long as the pool.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let opts = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await?;
    ensure_tables(&pool).await?;
    Ok(pool)
}

/// Create tables and indexes if they do not exist.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for (name, ddl) in TABLES {
        tracing::debug!(table = %name, "ensure table");
        sqlx::query(ddl).execute(pool).await?;
    }
    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_all_tables_idempotently() {
        let pool = connect_in_memory().await.unwrap();
        ensure_tables(&pool).await.unwrap();
        let names: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('usuario', 'post', 'comentario') ORDER BY name")
                .fetch_all(&pool)
                .await
                .unwrap();
        let names: Vec<&str> = names.iter().map(|(n,)| n.as_str()).collect();
        assert_eq!(names, vec!["comentario", "post", "usuario"]);
    }

    #[tokio::test]
    async fn enforces_foreign_keys() {
        let pool = connect_in_memory().await.unwrap();
        let result = sqlx::query("INSERT INTO post (titulo, conteudo, usuario_id) VALUES ('t', 'c', 42)")
            .execute(&pool)
            .await;
        assert!(result.is_err());
    }
}
