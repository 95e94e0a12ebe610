//! Browser interface: a description box that renders the generated visual.

pub mod error;
pub mod page;
pub mod routes;

use crate::utils::error::Result;
use axum::Router;
use tokio::net::TcpListener;

pub use routes::create_router;

/// Serves `app` on `host:port` until Ctrl-C.
pub async fn launch(app: Router, host: &str, port: u16) -> Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Running on local URL: http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
