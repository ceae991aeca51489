//! Persistence for `usuario`, including the cascading delete of its posts and comments.

use crate::model::{NovoUsuario, Usuario};
use sqlx::SqlitePool;

const SELECT_COLUMNS: &str = "SELECT id, nome, email FROM usuario";

pub struct UsuarioService;

impl UsuarioService {
    /// Insert one row and return its id.
    pub async fn insert(pool: &SqlitePool, novo: &NovoUsuario) -> sqlx::Result<i64> {
        let sql = "INSERT INTO usuario (nome, email) VALUES (?, ?)";
        tracing::debug!(sql = %sql, nome = %novo.nome, email = %novo.email, "query");
        let result = sqlx::query(sql)
            .bind(&novo.nome)
            .bind(&novo.email)
            .execute(pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Usuario>> {
        let sql = format!("{} WHERE id = ?", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Usuario>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> sqlx::Result<Option<Usuario>> {
        let sql = format!("{} WHERE email = ?", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, email = %email, "query");
        sqlx::query_as::<_, Usuario>(&sql)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_all(pool: &SqlitePool) -> sqlx::Result<Vec<Usuario>> {
        let sql = format!("{} ORDER BY id", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, Usuario>(&sql).fetch_all(pool).await
    }

    /// Write every column of `usuario` back. Returns false when the row is gone.
    pub async fn update(pool: &SqlitePool, usuario: &Usuario) -> sqlx::Result<bool> {
        let sql = "UPDATE usuario SET nome = ?, email = ? WHERE id = ?";
        tracing::debug!(sql = %sql, id = usuario.id, "query");
        let result = sqlx::query(sql)
            .bind(&usuario.nome)
            .bind(&usuario.email)
            .bind(usuario.id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete comments written by the user, comments on the user's posts, the posts, then the user,
    /// in one transaction. Returns false when no such user existed.
    pub async fn delete(pool: &SqlitePool, id: i64) -> sqlx::Result<bool> {
        let mut tx = pool.begin().await?;
        let steps = [
            "DELETE FROM comentario WHERE usuario_id = ?",
            "DELETE FROM comentario WHERE post_id IN (SELECT id FROM post WHERE usuario_id = ?)",
            "DELETE FROM post WHERE usuario_id = ?",
        ];
        for sql in steps {
            tracing::debug!(sql = %sql, id, "query (tx)");
            sqlx::query(sql).bind(id).execute(&mut *tx).await?;
        }
        let sql = "DELETE FROM usuario WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query (tx)");
        let result = sqlx::query(sql).bind(id).execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NovoComentario, NovoPost};
    use crate::service::{ComentarioService, PostService};
    use crate::store::connect_in_memory;

    fn ana() -> NovoUsuario {
        NovoUsuario {
            nome: "Ana".into(),
            email: "ana@x.com".into(),
        }
    }

    #[tokio::test]
    async fn insert_then_find() {
        let pool = connect_in_memory().await.unwrap();
        let id = UsuarioService::insert(&pool, &ana()).await.unwrap();
        assert!(id > 0);

        let found = UsuarioService::find_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(found.nome, "Ana");
        assert_eq!(
            UsuarioService::find_by_email(&pool, "ana@x.com").await.unwrap(),
            Some(found)
        );
        assert_eq!(UsuarioService::find_by_id(&pool, id + 1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn email_is_unique_in_the_store() {
        let pool = connect_in_memory().await.unwrap();
        UsuarioService::insert(&pool, &ana()).await.unwrap();
        let err = UsuarioService::insert(&pool, &ana()).await.unwrap_err();
        let is_unique = err
            .as_database_error()
            .map(|e| e.is_unique_violation())
            .unwrap_or(false);
        assert!(is_unique);
        assert_eq!(UsuarioService::find_all(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_reports_missing_row() {
        let pool = connect_in_memory().await.unwrap();
        let id = UsuarioService::insert(&pool, &ana()).await.unwrap();
        let mut usuario = UsuarioService::find_by_id(&pool, id).await.unwrap().unwrap();
        usuario.nome = "Ana Maria".into();
        assert!(UsuarioService::update(&pool, &usuario).await.unwrap());
        assert_eq!(
            UsuarioService::find_by_id(&pool, id).await.unwrap().unwrap().nome,
            "Ana Maria"
        );

        usuario.id += 10;
        assert!(!UsuarioService::update(&pool, &usuario).await.unwrap());
    }

    #[tokio::test]
    async fn delete_cascades_to_posts_and_comments() {
        let pool = connect_in_memory().await.unwrap();
        let ana = UsuarioService::insert(&pool, &ana()).await.unwrap();
        let bia = UsuarioService::insert(
            &pool,
            &NovoUsuario {
                nome: "Bia".into(),
                email: "bia@x.com".into(),
            },
        )
        .await
        .unwrap();

        let ana_post = PostService::insert(
            &pool,
            &NovoPost {
                titulo: "t".into(),
                conteudo: "c".into(),
                usuario_id: ana,
            },
        )
        .await
        .unwrap();
        let bia_post = PostService::insert(
            &pool,
            &NovoPost {
                titulo: "t2".into(),
                conteudo: "c2".into(),
                usuario_id: bia,
            },
        )
        .await
        .unwrap();
        for (usuario_id, post_id) in [(ana, ana_post), (bia, ana_post), (ana, bia_post), (bia, bia_post)] {
            ComentarioService::insert(
                &pool,
                &NovoComentario {
                    conteudo: "oi".into(),
                    usuario_id,
                    post_id,
                },
            )
            .await
            .unwrap();
        }

        assert!(UsuarioService::delete(&pool, ana).await.unwrap());
        assert!(!UsuarioService::delete(&pool, ana).await.unwrap());

        let posts = PostService::find_all(&pool).await.unwrap();
        assert_eq!(posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![bia_post]);
        let comentarios = ComentarioService::find_all(&pool).await.unwrap();
        assert_eq!(comentarios.len(), 1);
        assert_eq!((comentarios[0].usuario_id, comentarios[0].post_id), (bia, bia_post));
    }
}
