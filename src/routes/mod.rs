//! Router assembly.

mod api;
pub mod common;
mod docs;

pub use api::api_routes;
pub use common::common_routes;
pub use docs::docs_routes;

use crate::config::AppConfig;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Full application: entity routes, common routes and the OpenAPI document, with
/// request tracing, permissive CORS and a body size limit. Oversized bodies are
/// rejected by the JSON extractor, so they get the usual JSON error body.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .merge(docs_routes(&config.docs_route))
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
