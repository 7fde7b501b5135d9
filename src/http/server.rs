//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, CORS, limits, timeout, metrics)
//! - Bind server to listener
//! - Graceful shutdown

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::catalog::CatalogStore;
use crate::config::AppConfig;
use crate::http::cors::cors_layer;
use crate::http::handlers;
use crate::http::request::{request_id_of, MakeRequestUuidV4, X_REQUEST_ID};
use crate::lifecycle::shutdown_signal;
use crate::observability::metrics;
use crate::query::QueryService;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub query: QueryService,
}

/// HTTP server for the travel assistant API.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving `catalog`.
    pub fn new(config: AppConfig, catalog: Arc<CatalogStore>) -> Self {
        metrics::record_catalog_size(catalog.len());

        let state = AppState {
            query: QueryService::new(catalog),
        };

        let router = build_router(&config, state);
        Self { router, config }
    }

    /// A clone of the fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until an OS signal or a message on `shutdown`.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &AppConfig, state: AppState) -> Router {
    let layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id_of(request),
                )
            }),
        )
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
        .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
        .layer(cors_layer(&config.cors))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/recommendations", get(handlers::list_recommendations))
        .route("/recommendations/{destination}", get(handlers::get_recommendation))
        .route("/search", post(handlers::search))
        .route_layer(middleware::from_fn(metrics::track_requests))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(layers)
}
