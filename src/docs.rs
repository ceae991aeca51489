//! OpenAPI document generated from the handler annotations.

use crate::error::ErrorBody;
use crate::model::{Comentario, CreateComentario, CreatePost, CreateUsuario, Post, UpdateUsuario, Usuario};
use crate::response::{Created, Message};
use crate::routes::common::{BuildInfo, CheckStatus};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de Usuários, Posts e Comentários",
        description = "API para gerenciar usuários, posts e comentários",
        version = "1.0.0"
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::handlers::usuarios::create_usuario,
        crate::handlers::usuarios::list_usuarios,
        crate::handlers::usuarios::get_usuario,
        crate::handlers::usuarios::update_usuario,
        crate::handlers::usuarios::delete_usuario,
        crate::handlers::posts::create_post,
        crate::handlers::posts::list_posts,
        crate::handlers::comentarios::create_comentario,
        crate::handlers::comentarios::list_comentarios,
        crate::routes::common::health,
        crate::routes::common::ready,
        crate::routes::common::version,
    ),
    components(schemas(
        Usuario,
        Post,
        Comentario,
        CreateUsuario,
        UpdateUsuario,
        CreatePost,
        CreateComentario,
        Created,
        Message,
        ErrorBody,
        CheckStatus,
        BuildInfo
    )),
    tags(
        (name = "Usuários", description = "Cadastro de usuários"),
        (name = "Posts", description = "Posts publicados pelos usuários"),
        (name = "Comentários", description = "Comentários em posts"),
        (name = "Saúde", description = "Verificações operacionais")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::PathItem;

    fn path<'a>(doc: &'a utoipa::openapi::OpenApi, route: &str) -> &'a PathItem {
        doc.paths
            .paths
            .get(route)
            .unwrap_or_else(|| panic!("missing path {route}"))
    }

    #[test]
    fn lists_every_route() {
        let doc = ApiDoc::openapi();
        let usuarios = path(&doc, "/usuarios");
        assert!(usuarios.get.is_some() && usuarios.post.is_some());
        let usuario = path(&doc, "/usuarios/{id}");
        assert!(usuario.get.is_some() && usuario.put.is_some() && usuario.delete.is_some());
        let posts = path(&doc, "/posts");
        assert!(posts.get.is_some() && posts.post.is_some());
        let comentarios = path(&doc, "/comentarios");
        assert!(comentarios.get.is_some() && comentarios.post.is_some());
        for route in ["/health", "/ready", "/version"] {
            assert!(path(&doc, route).get.is_some());
        }
        assert_eq!(doc.paths.paths.len(), 7);
    }

    #[test]
    fn registers_entity_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().unwrap().schemas;
        for name in ["Usuario", "Post", "Comentario", "ErrorBody", "Created", "CheckStatus", "BuildInfo"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
        assert_eq!(doc.info.version, "1.0.0");
    }
}
