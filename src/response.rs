//! Response bodies shared by the write routes.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Body returned after a successful insert.
#[derive(Serialize, ToSchema)]
pub struct Created {
    #[schema(example = "Usuário criado")]
    pub message: String,
    #[schema(example = 1)]
    pub id: i64,
}

/// Body returned by update and delete.
#[derive(Serialize, ToSchema)]
pub struct Message {
    #[schema(example = "Usuário atualizado")]
    pub message: String,
}

pub fn created(message: &str, id: i64) -> (StatusCode, Json<Created>) {
    (
        StatusCode::CREATED,
        Json(Created {
            message: message.to_string(),
            id,
        }),
    )
}

pub fn message_ok(message: &str) -> (StatusCode, Json<Message>) {
    (
        StatusCode::OK,
        Json(Message {
            message: message.to_string(),
        }),
    )
}
