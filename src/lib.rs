//! REST backend for users (`usuarios`), posts and comments (`comentarios`) on SQLite,
//! with an OpenAPI document generated from the handlers.

pub mod config;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use docs::ApiDoc;
pub use error::{AppError, ConfigError};
pub use routes::{api_routes, app, common_routes, docs_routes};
pub use state::AppState;
pub use store::{connect, connect_in_memory, ensure_tables};
