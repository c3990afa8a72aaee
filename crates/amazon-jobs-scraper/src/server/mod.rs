//! HTTP server exposing the scrape endpoint.

pub mod transport;

use std::net::SocketAddr;

use crate::client::JobsClient;

/// Scrape server.
#[derive(Debug)]
pub struct ScrapeServer {
    client: JobsClient,
}

impl ScrapeServer {
    /// Create a new server around a jobs client.
    #[must_use]
    pub const fn new(client: JobsClient) -> Self {
        Self { client }
    }

    /// Build the router without binding a socket.
    #[must_use]
    pub fn router(self) -> axum::Router {
        transport::create_router(self.client)
    }

    /// Run the server until Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns error if the port cannot be bound or the server fails.
    pub async fn run_http(self, port: u16) -> anyhow::Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let router = self.router();

        tracing::info!("HTTP server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install CTRL+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
