//! Server binary: reads configuration, opens the SQLite store, creates the tables and serves the API.

use forum_api::{app, connect, ensure_tables, AppConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("forum_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool = connect(&config).await?;
    ensure_tables(&pool).await?;

    let router = app(AppState::new(pool), &config);
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    tracing::info!("OpenAPI document at {}", config.docs_route);
    axum::serve(listener, router).await?;
    Ok(())
}
