use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

const PREVIEW_CHARS: usize = 30;

/// Row of `comentario`. Removed with its author or its post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Comentario {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Este é o conteúdo do comentário")]
    pub conteudo: String,
    #[schema(example = 1)]
    pub usuario_id: i64,
    #[schema(example = 1)]
    pub post_id: i64,
}

impl fmt::Display for Comentario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview: String = self.conteudo.chars().take(PREVIEW_CHARS).collect();
        write!(f, "Comentario {} - {}...", self.id, preview)
    }
}

/// Body of `POST /comentarios`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateComentario {
    #[schema(example = "Este é o conteúdo do comentário")]
    pub conteudo: Option<String>,
    #[schema(example = 1)]
    pub usuario_id: Option<i64>,
    #[schema(example = 1)]
    pub post_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NovoComentario {
    pub conteudo: String,
    pub usuario_id: i64,
    pub post_id: i64,
}

impl NovoComentario {
    pub fn with_id(self, id: i64) -> Comentario {
        Comentario {
            id,
            conteudo: self.conteudo,
            usuario_id: self.usuario_id,
            post_id: self.post_id,
        }
    }
}
