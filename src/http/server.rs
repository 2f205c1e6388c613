//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout)
//! - Bind server to listener
//! - Drain in-flight requests on shutdown

use std::time::Duration;

use axum::{body::Body, http::Request, routing::get, Router};
use chrono::NaiveDate;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::QuoterConfig;
use crate::http::quote;
use crate::http::request::request_id;
use crate::quoting::QuoteEngine;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: QuoteEngine,
    pub update_date: NaiveDate,
}

/// HTTP server for the quote service.
pub struct HttpServer {
    router: Router,
    config: QuoterConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: QuoterConfig) -> Self {
        let state = AppState {
            engine: QuoteEngine::new(config.rules.clone(), config.pricing.clone()),
            update_date: config.service.update_date,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &QuoterConfig, state: AppState) -> Router {
        Router::new()
            .route("/quote", get(quote::get_quote))
            .route("/calc_update_date", get(quote::get_update_date))
            .route("/brands", get(quote::get_brands))
            .route("/health", get(quote::health))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http().make_span_with(
                        |request: &Request<Body>| {
                            tracing::info_span!(
                                "request",
                                request_id = %request_id(request),
                                method = %request.method(),
                                uri = %request.uri(),
                            )
                        },
                    ))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            rules_revision = %self.config.rules.revision,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &QuoterConfig {
        &self.config
    }
}
