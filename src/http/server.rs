//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with page, API, and asset handlers
//! - Wire up middleware (timeout, request ID, tracing)
//! - Serve until shutdown is signalled
//!
//! # Design Decisions
//! - Static routes (APIs, assets, health) take precedence over the
//!   catch-all page route; everything else renders a shell
//! - Graceful shutdown: the signal future is injectable so tests can stop
//!   a server without process signals

use std::future::Future;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::GatewayConfig;
use crate::http::handlers;
use crate::http::request::RequestIdLayer;
use crate::render::assets::SCROLL_SCRIPT_ROUTE;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub started_at: Instant,
    pub requests_served: Arc<AtomicU64>,
}

/// HTTP server for the site gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let state = AppState {
            started_at: Instant::now(),
            requests_served: Arc::new(AtomicU64::new(0)),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/healthz", get(handlers::health))
            .route("/api/section", get(handlers::get_section))
            .route("/api/form-options", get(handlers::get_form_options))
            .route("/api/metadata", get(handlers::get_metadata))
            .route(SCROLL_SCRIPT_ROUTE, get(handlers::scroll_script))
            .route("/", get(handlers::page))
            .route("/{*path}", get(handlers::page))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until Ctrl+C.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.run_until(listener, shutdown_signal()).await
    }

    /// Run the server until `signal` resolves.
    pub async fn run_until(
        self,
        listener: TcpListener,
        signal: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install Ctrl+C handler");
        return std::future::pending().await;
    }
    tracing::info!("Shutdown signal received");
}
