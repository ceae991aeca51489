//! `/comentarios` handlers.

use crate::error::{AppError, ErrorBody};
use crate::extractors::ApiJson;
use crate::model::{Comentario, CreateComentario};
use crate::response::{created, Created};
use crate::service::{ComentarioService, PostService, RequestValidator, UsuarioService};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};

pub const LIST_FAILED: &str = "Erro ao listar os comentários";

/// Criar um novo comentário
#[utoipa::path(
    post,
    path = "/comentarios",
    tag = "Comentários",
    request_body = CreateComentario,
    responses(
        (status = 201, description = "Comentário criado com sucesso", body = Created),
        (status = 400, description = "Requisição inválida, dados obrigatórios não fornecidos", body = ErrorBody),
        (status = 404, description = "Usuário ou post não encontrado", body = ErrorBody)
    )
)]
pub async fn create_comentario(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateComentario>,
) -> Result<impl IntoResponse, AppError> {
    let novo = RequestValidator::new_comentario(body)?;
    if UsuarioService::find_by_id(&state.pool, novo.usuario_id).await?.is_none() {
        return Err(AppError::NotFound(super::usuarios::NOT_FOUND.into()));
    }
    if PostService::find_by_id(&state.pool, novo.post_id).await?.is_none() {
        return Err(AppError::NotFound(super::posts::NOT_FOUND.into()));
    }
    let id = ComentarioService::insert(&state.pool, &novo).await?;
    tracing::info!(comentario = %novo.with_id(id), "comentario created");
    Ok(created("Comentário criado", id))
}

/// Listar todos os comentários
#[utoipa::path(
    get,
    path = "/comentarios",
    tag = "Comentários",
    responses(
        (status = 200, description = "Lista de comentários", body = [Comentario]),
        (status = 500, description = "Erro interno do servidor", body = ErrorBody)
    )
)]
pub async fn list_comentarios(State(state): State<AppState>) -> Result<Json<Vec<Comentario>>, AppError> {
    let comentarios = ComentarioService::find_all(&state.pool)
        .await
        .map_err(|source| AppError::Internal {
            message: LIST_FAILED,
            source,
        })?;
    Ok(Json(comentarios))
}
