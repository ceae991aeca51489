//! Entity routes for users, posts and comments.

use crate::handlers::comentarios::{create_comentario, list_comentarios};
use crate::handlers::posts::{create_post, list_posts};
use crate::handlers::usuarios::{create_usuario, delete_usuario, get_usuario, list_usuarios, update_usuario};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/usuarios", get(list_usuarios).post(create_usuario))
        .route(
            "/usuarios/:id",
            get(get_usuario).put(update_usuario).delete(delete_usuario),
        )
        .route("/posts", get(list_posts).post(create_post))
        .route("/comentarios", get(list_comentarios).post(create_comentario))
        .with_state(state)
}
