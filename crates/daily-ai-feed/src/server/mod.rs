//! HTTP server for the feed page.
//!
//! One process-wide [`PaperService`] is shared by every request; the router in
//! [`routes`] turns its output into HTML, JSON and plain text.

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::service::PaperService;

/// Web server for the Daily AI Research Feed.
pub struct FeedServer {
    service: Arc<PaperService>,
}

impl FeedServer {
    /// Create a new server around a paper service.
    #[must_use]
    pub fn new(service: PaperService) -> Self {
        Self { service: Arc::new(service) }
    }

    /// Shared service handle.
    #[must_use]
    pub fn service(&self) -> Arc<PaperService> {
        Arc::clone(&self.service)
    }

    /// Build the router without binding a socket.
    #[must_use]
    pub fn router(&self) -> axum::Router {
        routes::create_router(self.service())
    }

    /// Run the server until Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns error on bind or server failure.
    pub async fn run_http(self, addr: SocketAddr) -> anyhow::Result<()> {
        let router = self.router();

        tracing::info!("HTTP server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

impl std::fmt::Debug for FeedServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedServer").field("service", &self.service).finish()
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
