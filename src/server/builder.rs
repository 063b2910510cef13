//! ServerBuilder for assembling and running the HTTP server

use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::TrackerConfig;
use crate::core::service::OrderService;
use crate::core::tracker::{Tracker, seed_orders};
use crate::server::handlers::AppState;
use crate::server::router::build_router;
use crate::storage::InMemoryOrderService;

/// Builder for creating the tracker HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new(TrackerConfig::default_config())
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: TrackerConfig,
    service: Option<Arc<dyn OrderService>>,
}

impl ServerBuilder {
    /// Create a builder from a validated configuration
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            service: None,
        }
    }

    /// Override the order service
    ///
    /// Without an override the builder assembles the in-memory service,
    /// seeded with the demo orders when the configuration asks for them.
    pub fn with_service(mut self, service: impl OrderService + 'static) -> Self {
        self.service = Some(Arc::new(service));
        self
    }

    /// Build the application router
    pub fn build(self) -> Result<Router> {
        let config = Arc::new(self.config);

        let service: Arc<dyn OrderService> = match self.service {
            Some(service) => service,
            None => {
                let roster = config.roster();
                let tracker = if config.seed_demo_data {
                    let orders = seed_orders(&roster);
                    tracing::info!(count = orders.len(), "seeding demo orders");
                    Tracker::with_orders(roster, orders)
                } else {
                    Tracker::new(roster)
                };
                Arc::new(InMemoryOrderService::from_tracker(tracker))
            }
        };

        let state = AppState { service, config };
        Ok(build_router(state))
    }

    /// Serve the application with graceful shutdown
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.listen_addr.clone();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
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
