use std::future::Future;
use std::sync::Arc;

use rolo_store::ContactStore;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Rolo contact directory server.
///
/// Owns the one store instance for the lifetime of the process and shares it
/// with every request through [`AppState`].
pub struct RoloServer {
    config: ServerConfig,
    store: Arc<dyn ContactStore>,
}

impl RoloServer {
    pub fn new(config: ServerConfig, store: Arc<dyn ContactStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(Arc::clone(&self.store), &self.config), &self.config)
    }

    /// Serve until the process is terminated.
    pub async fn serve(self) -> ServerResult<()> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!(
            addr = %self.config.bind_addr,
            service = %self.config.service_name,
            "contact server listening"
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        tracing::info!("contact server stopped");
        Ok(())
    }
}

impl std::fmt::Debug for RoloServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoloServer")
            .field("config", &self.config)
            .field("contact_count", &self.store.len())
            .finish()
    }
}
