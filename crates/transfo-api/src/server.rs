//! Server startup and graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use transfo_storage::RowSource;

use crate::error::Result;
use crate::routes::{AppState, router};

/// The Transfo Desk API server.
pub struct Server {
    addr: SocketAddr,
    store: Arc<dyn RowSource>,
}

impl Server {
    /// Create a server that will bind `addr` and read from `store`.
    pub fn new(addr: SocketAddr, store: Arc<dyn RowSource>) -> Self {
        Self { addr, store }
    }

    /// Bind and serve until ctrl-c.
    ///
    /// An unreachable database at startup is logged but not fatal: the
    /// process stays up and the health endpoint reports the outage, same
    /// as when the database drops mid-flight.
    pub async fn serve(self) -> Result<()> {
        if self.store.ping().await {
            tracing::info!("database connection successful");
        } else {
            tracing::warn!("database unreachable at startup, serving anyway");
        }

        let app = router(AppState::new(self.store));
        let listener = TcpListener::bind(self.addr).await?;
        tracing::info!(addr = %self.addr, "listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to install shutdown handler");
        return;
    }
    tracing::info!("shutdown signal received");
}
