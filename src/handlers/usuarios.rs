//! `/usuarios` handlers: create, list, read, partial update, cascading delete.

use super::parse_id;
use crate::error::{AppError, ErrorBody};
use crate::extractors::ApiJson;
use crate::model::{CreateUsuario, UpdateUsuario, Usuario};
use crate::response::{created, message_ok, Created, Message};
use crate::service::{RequestValidator, UsuarioService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub const NOT_FOUND: &str = "Usuário não encontrado";
pub const EMAIL_TAKEN: &str = "Este email já está cadastrado";

fn conflict_on_duplicate_email(e: sqlx::Error) -> AppError {
    let duplicate = e.as_database_error().is_some_and(|db| db.is_unique_violation());
    if duplicate {
        AppError::Conflict(EMAIL_TAKEN.into())
    } else {
        AppError::Db(e)
    }
}

/// Criar um novo usuário
#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "Usuários",
    request_body = CreateUsuario,
    responses(
        (status = 201, description = "Usuário criado com sucesso", body = Created),
        (status = 400, description = "Nome e email são obrigatórios ou email já cadastrado", body = ErrorBody)
    )
)]
pub async fn create_usuario(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateUsuario>,
) -> Result<impl IntoResponse, AppError> {
    let novo = RequestValidator::new_usuario(body)?;
    if UsuarioService::find_by_email(&state.pool, &novo.email).await?.is_some() {
        return Err(AppError::Conflict(EMAIL_TAKEN.into()));
    }
    // The UNIQUE constraint still catches a concurrent insert of the same email.
    let id = UsuarioService::insert(&state.pool, &novo)
        .await
        .map_err(conflict_on_duplicate_email)?;
    tracing::info!(usuario = %novo.with_id(id), "usuario created");
    Ok(created("Usuário criado", id))
}

/// Listar todos os usuários
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "Usuários",
    responses(
        (status = 200, description = "Retorna uma lista de usuários", body = [Usuario]),
        (status = 500, description = "Erro interno do servidor", body = ErrorBody)
    )
)]
pub async fn list_usuarios(State(state): State<AppState>) -> Result<Json<Vec<Usuario>>, AppError> {
    Ok(Json(UsuarioService::find_all(&state.pool).await?))
}

/// Obter detalhes de um usuário pelo ID
#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    tag = "Usuários",
    params(("id" = i64, Path, description = "ID do usuário", example = 1)),
    responses(
        (status = 200, description = "Retorna os detalhes do usuário", body = Usuario),
        (status = 404, description = "Usuário não encontrado", body = ErrorBody)
    )
)]
pub async fn get_usuario(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Usuario>, AppError> {
    let id = parse_id(&id_str, NOT_FOUND)?;
    let usuario = UsuarioService::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(Json(usuario))
}

/// Atualizar um usuário
#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    tag = "Usuários",
    params(("id" = i64, Path, description = "ID do usuário", example = 1)),
    request_body = UpdateUsuario,
    responses(
        (status = 200, description = "Usuário atualizado com sucesso", body = Message),
        (status = 400, description = "Campo enviado vazio", body = ErrorBody),
        (status = 404, description = "Usuário não encontrado", body = ErrorBody)
    )
)]
pub async fn update_usuario(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<ApiJson<UpdateUsuario>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, NOT_FOUND)?;
    let mut usuario = UsuarioService::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    // The body is only judged once the user is known to exist.
    let ApiJson(body) = body?;
    let changes = RequestValidator::usuario_changes(body)?;
    // Email uniqueness is not re-checked; a clash fails in the store as an internal error.
    if !changes.is_empty() {
        changes.apply(&mut usuario);
        if !UsuarioService::update(&state.pool, &usuario).await? {
            return Err(AppError::NotFound(NOT_FOUND.into()));
        }
        tracing::info!(usuario = %usuario, "usuario updated");
    }
    Ok(message_ok("Usuário atualizado"))
}

/// Deletar um usuário
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    tag = "Usuários",
    params(("id" = i64, Path, description = "ID do usuário", example = 1)),
    responses(
        (status = 200, description = "Usuário deletado com sucesso", body = Message),
        (status = 404, description = "Usuário não encontrado", body = ErrorBody)
    )
)]
pub async fn delete_usuario(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, NOT_FOUND)?;
    if !UsuarioService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    tracing::info!(id, "usuario deleted");
    Ok(message_ok("Usuário deletado"))
}
