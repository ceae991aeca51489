use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Row of `usuario`. Owns posts and comments; deleting it deletes them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Usuario {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "João Roberto")]
    pub nome: String,
    #[schema(example = "joao@email.com")]
    pub email: String,
}

impl fmt::Display for Usuario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.nome)
    }
}

/// Body of `POST /usuarios`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateUsuario {
    #[schema(example = "João Roberto")]
    pub nome: Option<String>,
    #[schema(example = "joao@email.com")]
    pub email: Option<String>,
}

/// Body of `PUT /usuarios/{id}`. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUsuario {
    #[serde(default, deserialize_with = "super::present")]
    #[schema(value_type = Option<String>, example = "João Roberto")]
    pub nome: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    #[schema(value_type = Option<String>, example = "joao@email.com")]
    pub email: Option<Option<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NovoUsuario {
    pub nome: String,
    pub email: String,
}

impl NovoUsuario {
    pub fn with_id(self, id: i64) -> Usuario {
        Usuario {
            id,
            nome: self.nome,
            email: self.email,
        }
    }
}

/// Validated partial update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsuarioChanges {
    pub nome: Option<String>,
    pub email: Option<String>,
}

impl UsuarioChanges {
    pub fn is_empty(&self) -> bool {
        self.nome.is_none() && self.email.is_none()
    }

    pub fn apply(self, usuario: &mut Usuario) {
        if let Some(nome) = self.nome {
            usuario.nome = nome;
        }
        if let Some(email) = self.email {
            usuario.email = email;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_distinguishes_absent_from_null() {
        let body: UpdateUsuario = serde_json::from_str(r#"{"nome": null}"#).unwrap();
        assert_eq!(body.nome, Some(None));
        assert_eq!(body.email, None);

        let body: UpdateUsuario = serde_json::from_str(r#"{"email": "a@b.c"}"#).unwrap();
        assert_eq!(body.nome, None);
        assert_eq!(body.email, Some(Some("a@b.c".to_string())));
    }

    #[test]
    fn changes_apply_only_present_fields() {
        let mut usuario = Usuario {
            id: 3,
            nome: "Ana".into(),
            email: "ana@x.com".into(),
        };
        UsuarioChanges {
            nome: Some("Ana Maria".into()),
            email: None,
        }
        .apply(&mut usuario);
        assert_eq!(usuario.nome, "Ana Maria");
        assert_eq!(usuario.email, "ana@x.com");
        assert_eq!(usuario.to_string(), "3 - Ana Maria");
    }
}
