//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the listener
//! - Start the background ping scheduler
//! - Serve until shutdown, then wait for background tasks
//!
//! # Design Decisions
//! - Fail fast: a bind failure is fatal
//! - Listener binds first (traffic only when ready)

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::RelayConfig;
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::ping::PingScheduler;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build ping client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Bind the configured address and serve until `shutdown` is triggered.
pub async fn start(config: RelayConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    let address = config.listener.bind_address.clone();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    serve(listener, config, shutdown).await
}

/// Serve on an already-bound listener until `shutdown` is triggered.
pub async fn serve(
    listener: TcpListener,
    config: RelayConfig,
    shutdown: &Shutdown,
) -> Result<(), StartupError> {
    let server = HttpServer::new(config)?;

    let scheduler = PingScheduler::new(server.relay().clone(), &server.config().ping);
    let scheduler_task = if scheduler.is_enabled() {
        Some(tokio::spawn(scheduler.run(shutdown.subscribe())))
    } else {
        tracing::info!("Scheduled ping disabled");
        None
    };

    let result = server.run(listener, shutdown.subscribe()).await;

    // Stop the scheduler even when the server exited on its own.
    shutdown.trigger();
    if let Some(task) = scheduler_task {
        if let Err(e) = task.await {
            tracing::error!(error = %e, "Ping scheduler task failed");
        }
    }

    result.map_err(StartupError::Serve)
}
