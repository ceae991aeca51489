//! Persistence for `comentario`.

use crate::model::{Comentario, NovoComentario};
use sqlx::SqlitePool;

const SELECT_COLUMNS: &str = "SELECT id, conteudo, usuario_id, post_id FROM comentario";

pub struct ComentarioService;

impl ComentarioService {
    pub async fn insert(pool: &SqlitePool, novo: &NovoComentario) -> sqlx::Result<i64> {
        let sql = "INSERT INTO comentario (conteudo, usuario_id, post_id) VALUES (?, ?, ?)";
        tracing::debug!(sql = %sql, usuario_id = novo.usuario_id, post_id = novo.post_id, "query");
        let result = sqlx::query(sql)
            .bind(&novo.conteudo)
            .bind(novo.usuario_id)
            .bind(novo.post_id)
            .execute(pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Comentario>> {
        let sql = format!("{} WHERE id = ?", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Comentario>(&sql).bind(id).fetch_optional(pool).await
    }

    pub async fn find_all(pool: &SqlitePool) -> sqlx::Result<Vec<Comentario>> {
        let sql = format!("{} ORDER BY id", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, Comentario>(&sql).fetch_all(pool).await
    }
}
