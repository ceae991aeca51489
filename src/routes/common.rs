//! Operational routes: liveness, store readiness and build version. They are listed in the OpenAPI
//! document under the `Saúde` tag.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

/// Result of a liveness or readiness check.
#[derive(Serialize, ToSchema)]
pub struct CheckStatus {
    #[schema(value_type = String, example = "ok")]
    pub status: &'static str,
    /// Store reachability; only reported by `/ready`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "ok")]
    pub database: Option<&'static str>,
}

impl CheckStatus {
    const fn alive() -> Self {
        Self {
            status: "ok",
            database: None,
        }
    }

    const fn store(reachable: bool) -> Self {
        if reachable {
            Self {
                status: "ok",
                database: Some("ok"),
            }
        } else {
            Self {
                status: "degraded",
                database: Some("unavailable"),
            }
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct BuildInfo {
    #[schema(value_type = String, example = "forum-api")]
    pub name: &'static str,
    #[schema(value_type = String, example = "0.1.0")]
    pub version: &'static str,
}

/// Processo ativo
#[utoipa::path(
    get,
    path = "/health",
    tag = "Saúde",
    responses((status = 200, description = "Processo respondendo", body = CheckStatus))
)]
pub async fn health() -> Json<CheckStatus> {
    Json(CheckStatus::alive())
}

/// Banco de dados acessível
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Saúde",
    responses(
        (status = 200, description = "Banco de dados acessível", body = CheckStatus),
        (status = 503, description = "Banco de dados indisponível", body = CheckStatus)
    )
)]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<CheckStatus>) {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (StatusCode::OK, Json(CheckStatus::store(true))),
        Err(e) => {
            tracing::warn!(error = %e, "store unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, Json(CheckStatus::store(false)))
        }
    }
}

/// Versão do serviço
#[utoipa::path(
    get,
    path = "/version",
    tag = "Saúde",
    responses((status = 200, description = "Nome e versão do pacote", body = BuildInfo))
)]
pub async fn version() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
