//! # HTTP Server
//!
//! Combines the product and health routers into one Axum server.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use super::product_routes::{product_routes, ProductState};
use crate::observability::{Event, Logger};
use crate::store::FileStore;

/// HTTP server for the product store
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over `store` with the given configuration
    pub fn with_config(config: HttpServerConfig, store: FileStore) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router(config: &HttpServerConfig, store: FileStore) -> Router {
        let product_state = Arc::new(ProductState::new(store));

        Router::new()
            .merge(health_routes(product_state.clone()))
            .merge(product_routes(product_state))
            .layer(config.cors_layer())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        Logger::event(Event::ServerStarting, &[("addr", addr.as_str())]);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
