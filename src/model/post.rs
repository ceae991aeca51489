use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Row of `post`. Belongs to a `usuario`; its comments go with it on delete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Post {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Título do post")]
    pub titulo: String,
    #[schema(example = "Conteúdo do post")]
    pub conteudo: String,
    #[schema(example = 1)]
    pub usuario_id: i64,
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.titulo)
    }
}

/// Body of `POST /posts`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreatePost {
    #[schema(example = "Título do post")]
    pub titulo: Option<String>,
    #[schema(example = "Conteúdo do post")]
    pub conteudo: Option<String>,
    #[schema(example = 1)]
    pub usuario_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NovoPost {
    pub titulo: String,
    pub conteudo: String,
    pub usuario_id: i64,
}

impl NovoPost {
    pub fn with_id(self, id: i64) -> Post {
        Post {
            id,
            titulo: self.titulo,
            conteudo: self.conteudo,
            usuario_id: self.usuario_id,
        }
    }
}
