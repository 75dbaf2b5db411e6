//! ServerBuilder for fluent API to build HTTP servers

use super::host::CampusHost;
use super::router::api_routes;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for the campus HTTP application
///
/// # Example
///
/// ```ignore
/// let host = CampusHost::connect(CampusConfig::default_config()).await?;
/// ServerBuilder::new()
///     .with_host(host)
///     .serve("127.0.0.1:3000")
///     .await?;
/// ```
pub struct ServerBuilder {
    host: Option<Arc<CampusHost>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            host: None,
            custom_routes: Vec::new(),
        }
    }

    /// Set the host serving every route (required)
    pub fn with_host(mut self, host: CampusHost) -> Self {
        self.host = Some(Arc::new(host));
        self
    }

    /// Share an existing host
    pub fn with_shared_host(mut self, host: Arc<CampusHost>) -> Self {
        self.host = Some(host);
        self
    }

    /// Add routes outside the collection API
    ///
    /// Custom routes are merged after the built-in ones and get the same
    /// tracing and CORS layers.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the router with state and layers attached
    pub fn build(self) -> Result<Router> {
        let host = self
            .host
            .ok_or_else(|| anyhow::anyhow!("CampusHost is required. Call .with_host()"))?;

        let mut app = api_routes().with_state(host);
        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `addr` and serves until SIGTERM or Ctrl+C.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves on Ctrl+C or SIGTERM
///
/// A signal handler that cannot be installed is logged and never fires; the
/// other one still stops the server.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
