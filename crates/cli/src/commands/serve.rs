use anyhow::Result;
use insights_http::{create_router, AppState};
use insights_service::InsightService;
use insights_storage::Storage;
use std::path::PathBuf;
use std::sync::Arc;

use crate::ensure_db_dir;

pub(crate) async fn run(host: String, port: u16, db_path: PathBuf) -> Result<()> {
    ensure_db_dir(&db_path)?;
    tracing::info!("Opening SQLite database at {}", db_path.display());
    let storage = Storage::new(&db_path)?;

    let insight_service = Arc::new(InsightService::new(Arc::new(storage.clone())));
    let state = Arc::new(AppState::new(insight_service));

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("Shutting down gracefully...");
    tokio::task::spawn_blocking(move || storage.close()).await??;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            },
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
