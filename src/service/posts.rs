//! Persistence for `post`.

use crate::model::{NovoPost, Post};
use sqlx::SqlitePool;

const SELECT_COLUMNS: &str = "SELECT id, titulo, conteudo, usuario_id FROM post";

pub struct PostService;

impl PostService {
    pub async fn insert(pool: &SqlitePool, novo: &NovoPost) -> sqlx::Result<i64> {
        let sql = "INSERT INTO post (titulo, conteudo, usuario_id) VALUES (?, ?, ?)";
        tracing::debug!(sql = %sql, usuario_id = novo.usuario_id, "query");
        let result = sqlx::query(sql)
            .bind(&novo.titulo)
            .bind(&novo.conteudo)
            .bind(novo.usuario_id)
            .execute(pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Post>> {
        let sql = format!("{} WHERE id = ?", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Post>(&sql).bind(id).fetch_optional(pool).await
    }

    pub async fn find_all(pool: &SqlitePool) -> sqlx::Result<Vec<Post>> {
        let sql = format!("{} ORDER BY id", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, Post>(&sql).fetch_all(pool).await
    }

    /// Delete the post and its comments in one transaction. Returns false when no such post existed.
    pub async fn delete(pool: &SqlitePool, id: i64) -> sqlx::Result<bool> {
        let mut tx = pool.begin().await?;
        let sql = "DELETE FROM comentario WHERE post_id = ?";
        tracing::debug!(sql = %sql, id, "query (tx)");
        sqlx::query(sql).bind(id).execute(&mut *tx).await?;
        let sql = "DELETE FROM post WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query (tx)");
        let result = sqlx::query(sql).bind(id).execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NovoComentario, NovoUsuario};
    use crate::service::{ComentarioService, UsuarioService};
    use crate::store::connect_in_memory;

    #[tokio::test]
    async fn rejects_unknown_owner_at_store_level() {
        let pool = connect_in_memory().await.unwrap();
        let result = PostService::insert(
            &pool,
            &NovoPost {
                titulo: "t".into(),
                conteudo: "c".into(),
                usuario_id: 99,
            },
        )
        .await;
        assert!(result.is_err());
        assert!(PostService::find_all(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_comments_only_of_that_post() {
        let pool = connect_in_memory().await.unwrap();
        let usuario_id = UsuarioService::insert(
            &pool,
            &NovoUsuario {
                nome: "Ana".into(),
                email: "ana@x.com".into(),
            },
        )
        .await
        .unwrap();
        let mut post_ids = Vec::new();
        for titulo in ["um", "dois"] {
            let id = PostService::insert(
                &pool,
                &NovoPost {
                    titulo: titulo.into(),
                    conteudo: "c".into(),
                    usuario_id,
                },
            )
            .await
            .unwrap();
            ComentarioService::insert(
                &pool,
                &NovoComentario {
                    conteudo: format!("sobre {}", titulo),
                    usuario_id,
                    post_id: id,
                },
            )
            .await
            .unwrap();
            post_ids.push(id);
        }

        assert!(PostService::delete(&pool, post_ids[0]).await.unwrap());
        assert_eq!(PostService::find_by_id(&pool, post_ids[0]).await.unwrap(), None);
        let remaining = ComentarioService::find_all(&pool).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].post_id, post_ids[1]);
        assert!(UsuarioService::find_by_id(&pool, usuario_id).await.unwrap().is_some());
        assert!(!PostService::delete(&pool, post_ids[0]).await.unwrap());
    }
}
