//! HTTP server setup and navigation dispatch.
//!
//! # Responsibilities
//! - Create the axum Router with the catch-all navigation handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Resolve every request through the route table
//! - Render the matched view, 404 for the fallback
//! - Graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::http::response;
use crate::lifecycle::{signals, Shutdown};
use crate::routing::Router as ViewRouter;
use crate::views::{route_table, View};

/// Application state injected into the navigation handler.
#[derive(Clone)]
pub struct AppState {
    router: Arc<ViewRouter<View>>,
    base_path: Arc<str>,
}

/// HTTP server hosting the application shell.
pub struct HttpServer {
    app: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new server from validated configuration.
    ///
    /// Builds the route table once; it is immutable for the life of the
    /// process.
    pub fn new(config: AppConfig) -> Result<Self, crate::routing::RouterError> {
        let router = Arc::new(route_table()?);

        tracing::debug!(
            routes = router.len(),
            base_path = %config.base_path,
            "Route table compiled"
        );

        let state = AppState {
            router,
            base_path: config.base_path.as_str().into(),
        };

        let app = Self::build_app(&config, state);
        Ok(Self { app, config })
    }

    /// Build the axum router with all middleware layers.
    fn build_app(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(navigate))
            .route("/", any(navigate))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Stops on Ctrl+C or when `shutdown` is triggered.
    pub async fn run(self, listener: TcpListener, shutdown: Shutdown) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let mut rx = shutdown.subscribe();
        axum::serve(listener, self.app)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = signals::shutdown_signal() => {}
                    _ = rx.recv() => {
                        tracing::info!("Shutdown triggered");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Navigation handler: every path resolves through the route table.
async fn navigate(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let path = request.uri().path();

    let Some(app_path) = strip_base_path(&state.base_path, path) else {
        tracing::debug!(request_id = %request_id, path = %path, "Path outside base path");
        return response::render_not_found();
    };

    match state.router.resolve(app_path) {
        Some(resolution) => {
            tracing::debug!(
                request_id = %request_id,
                path = %path,
                route = %resolution.name,
                "Navigation resolved"
            );
            response::render(&resolution)
        }
        None => {
            // Unreachable with the wildcard fallback registered, but the
            // no-match case stays explicit.
            tracing::warn!(request_id = %request_id, path = %path, "No route matched");
            response::render_not_found()
        }
    }
}

/// Strip the configured base path from a request path.
///
/// Returns `None` for paths outside the base. A base of "/" passes every
/// path through unchanged.
fn strip_base_path<'a>(base: &str, path: &'a str) -> Option<&'a str> {
    if base == "/" || base.is_empty() {
        return Some(path);
    }
    let rest = path.strip_prefix(base)?;
    if rest.is_empty() {
        Some("/")
    } else if rest.starts_with('/') {
        Some(rest)
    } else {
        // "/appendix" is not under "/app".
        None
    }
}
