use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::handler::{create_product, get_product, list_products};
use crate::store::Store;

/// HTTP server for the product API
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    store: Arc<Store>,
}

impl Server {
    /// Create and bind the HTTP server to the specified address
    pub async fn bind(addr: &str, store: Arc<Store>) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        info!("HTTP server bound to {}", local_addr);

        Ok(Self {
            listener,
            local_addr,
            store,
        })
    }

    /// Get local listening address
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Build the router serving the product routes over `store`
    pub fn router(store: Arc<Store>) -> Router {
        Router::new()
            .route("/products", get(list_products).post(create_product))
            .route("/products/:id", get(get_product))
            .with_state(store)
    }

    /// Serve requests until ctrl-c is received
    pub async fn run(self) -> std::io::Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Serve requests until `shutdown` completes.
    ///
    /// In-flight requests are allowed to finish before this returns.
    pub async fn run_until<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.store.is_empty() {
            warn!("Server starting with an empty store");
        }
        info!(
            "Server started, listening on {} with {} products",
            self.local_addr,
            self.store.len()
        );

        let app = Self::router(self.store);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler there is no way to stop gracefully, keep serving
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
