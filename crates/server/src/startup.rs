use axum::Router;
use configs::{AppConfig, StorageBackend};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the configured store. The database backend applies pending
/// migrations before the router is built.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    match cfg.storage.backend {
        StorageBackend::Memory => {
            warn!("memory storage selected; records are lost on restart");
            Ok(AppState::in_memory())
        }
        StorageBackend::Database => {
            let db = models::db::connect_and_migrate(&cfg.database).await?;
            Ok(AppState::from_db(db))
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Run the HTTP server with an already loaded config until Ctrl+C.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, backend = ?cfg.storage.backend, "starting rental server");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
