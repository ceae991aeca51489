//! `/posts` handlers.

use crate::error::{AppError, ErrorBody};
use crate::extractors::ApiJson;
use crate::model::{CreatePost, Post};
use crate::response::{created, Created};
use crate::service::{PostService, RequestValidator, UsuarioService};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};

pub const NOT_FOUND: &str = "Post não encontrado";
pub const LIST_FAILED: &str = "Erro ao listar os posts";

/// Criar um novo post
#[utoipa::path(
    post,
    path = "/posts",
    tag = "Posts",
    request_body = CreatePost,
    responses(
        (status = 201, description = "Post criado com sucesso", body = Created),
        (status = 400, description = "Requisição inválida, dados obrigatórios não fornecidos", body = ErrorBody),
        (status = 404, description = "Usuário não encontrado", body = ErrorBody)
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreatePost>,
) -> Result<impl IntoResponse, AppError> {
    let novo = RequestValidator::new_post(body)?;
    if UsuarioService::find_by_id(&state.pool, novo.usuario_id).await?.is_none() {
        return Err(AppError::NotFound(super::usuarios::NOT_FOUND.into()));
    }
    let id = PostService::insert(&state.pool, &novo).await?;
    tracing::info!(post = %novo.with_id(id), "post created");
    Ok(created("Post criado", id))
}

/// Listar todos os posts
#[utoipa::path(
    get,
    path = "/posts",
    tag = "Posts",
    responses(
        (status = 200, description = "Lista de posts", body = [Post]),
        (status = 500, description = "Erro interno do servidor", body = ErrorBody)
    )
)]
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, AppError> {
    let posts = PostService::find_all(&state.pool)
        .await
        .map_err(|source| AppError::Internal {
            message: LIST_FAILED,
            source,
        })?;
    Ok(Json(posts))
}
