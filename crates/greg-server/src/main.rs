use std::path::PathBuf;
use std::sync::Arc;

use greg_core::knowledge::KnowledgeStore;

mod error;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt().init();

    let domain_dir = std::env::var("DOMAIN_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config/domains"));

    let knowledge = KnowledgeStore::load(&domain_dir)?;
    if knowledge.is_empty() {
        tracing::warn!(dir = %domain_dir.display(), "no domains loaded");
    } else {
        tracing::info!(domains = ?knowledge.domain_names(), "knowledge store ready");
    }

    let state = Arc::new(AppState::new(knowledge));
    let app = routes::router(state);

    let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("SERVER_PORT").unwrap_or_else(|_| "8000".to_string());
    let bind_addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "server running");
    axum::serve(listener, app).await?;

    Ok(())
}
