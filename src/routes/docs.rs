//! Serves the OpenAPI document. It is built once, when the router is assembled.

use crate::docs::ApiDoc;
use axum::{routing::get, Json, Router};
use std::sync::Arc;
use utoipa::OpenApi;

pub fn docs_routes(route: &str) -> Router {
    let document = Arc::new(ApiDoc::openapi());
    Router::new().route(
        route,
        get(move || {
            let document = Arc::clone(&document);
            async move { Json(document.as_ref().clone()) }
        }),
    )
}
