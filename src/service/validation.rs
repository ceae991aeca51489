//! Request validation: turns raw payloads into insert/update shapes or a `Validation` error.

use crate::error::AppError;
use crate::model::{
    CreateComentario, CreatePost, CreateUsuario, NovoComentario, NovoPost, NovoUsuario, UpdateUsuario,
    UsuarioChanges,
};

pub const USUARIO_REQUIRED: &str = "Nome e email são obrigatórios";
pub const POST_REQUIRED: &str = "Título, conteúdo e usuário_id são obrigatórios";
pub const COMENTARIO_REQUIRED: &str = "Conteúdo, usuário_id e post_id são obrigatórios";

pub struct RequestValidator;

impl RequestValidator {
    pub fn new_usuario(body: CreateUsuario) -> Result<NovoUsuario, AppError> {
        let (Some(nome), Some(email)) = (text(body.nome), text(body.email)) else {
            return Err(AppError::Validation(USUARIO_REQUIRED.into()));
        };
        Ok(NovoUsuario { nome, email })
    }

    /// Validate only the fields present in the body. A present field must not be null or blank.
    pub fn usuario_changes(body: UpdateUsuario) -> Result<UsuarioChanges, AppError> {
        Ok(UsuarioChanges {
            nome: changed("nome", body.nome)?,
            email: changed("email", body.email)?,
        })
    }

    pub fn new_post(body: CreatePost) -> Result<NovoPost, AppError> {
        let (Some(titulo), Some(conteudo), Some(usuario_id)) =
            (text(body.titulo), text(body.conteudo), id(body.usuario_id))
        else {
            return Err(AppError::Validation(POST_REQUIRED.into()));
        };
        Ok(NovoPost {
            titulo,
            conteudo,
            usuario_id,
        })
    }

    pub fn new_comentario(body: CreateComentario) -> Result<NovoComentario, AppError> {
        let (Some(conteudo), Some(usuario_id), Some(post_id)) =
            (text(body.conteudo), id(body.usuario_id), id(body.post_id))
        else {
            return Err(AppError::Validation(COMENTARIO_REQUIRED.into()));
        };
        Ok(NovoComentario {
            conteudo,
            usuario_id,
            post_id,
        })
    }
}

/// Blank strings count as missing.
fn text(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

/// Zero counts as missing; ids are assigned from 1.
fn id(v: Option<i64>) -> Option<i64> {
    v.filter(|n| *n != 0)
}

fn changed(col: &str, v: Option<Option<String>>) -> Result<Option<String>, AppError> {
    match v {
        None => Ok(None),
        Some(value) => text(value)
            .map(Some)
            .ok_or_else(|| AppError::Validation(format!("{} não pode ser vazio", col))),
    }
}
