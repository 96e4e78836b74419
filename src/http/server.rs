//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with both handlers
//! - Wire up middleware (tracing, request ID, request timeout)
//! - Serve on a bound listener until shutdown

use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::RelayConfig;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::http::response;
use crate::lifecycle::shutdown;
use crate::ping::PingRelay;
use crate::routing::{RedirectOutcome, RedirectTable};

/// Slack added on top of the ping deadline for the whole-request timeout.
const REQUEST_TIMEOUT_SLACK: Duration = Duration::from_secs(5);

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub redirects: RedirectTable,
    pub relay: PingRelay,
}

/// HTTP server for the redirect and ping endpoints.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
    relay: PingRelay,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        let relay = PingRelay::new(&config.ping)?;

        let state = AppState {
            redirects: RedirectTable::legacy(),
            relay: relay.clone(),
        };

        for rule in state.redirects.rules() {
            tracing::debug!(path = %rule.matcher.literal(), target = %rule.target, "Redirect rule loaded");
        }

        let request_timeout = relay.timeout().saturating_add(REQUEST_TIMEOUT_SLACK);
        let router = Self::build_router(request_timeout, state);
        Ok(Self {
            router,
            config,
            relay,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(request_timeout: Duration, state: AppState) -> Router {
        Router::new()
            .route("/tasks/ping", get(ping_handler))
            .fallback(redirect_handler)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(request_timeout))
                    .layer(propagate_request_id_layer()),
            )
    }

    /// The assembled router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// The relay backing `/tasks/ping`.
    pub fn relay(&self) -> &PingRelay {
        &self.relay
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Answers legacy blog URLs with a permanent redirect, everything else with 404.
async fn redirect_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let path = request.uri().path();

    match state.redirects.resolve(path) {
        RedirectOutcome::Found(target) => {
            tracing::debug!(
                request_id = %request_id(&request),
                path = %path,
                target = %target,
                "Redirecting legacy URL"
            );
            response::permanent_redirect(target)
        }
        RedirectOutcome::NotFound => {
            tracing::debug!(request_id = %request_id(&request), path = %path, "No redirect rule matched");
            response::not_found()
        }
    }
}

/// Pings the upstream once and reports the result as plain text.
async fn ping_handler(State(state): State<AppState>) -> Response {
    let outcome = state.relay.ping().await;
    response::plain_text(outcome.render())
}
