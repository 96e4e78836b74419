//! legacy-redirects
//!
//! Answers the blog's retired URLs with permanent redirects and serves
//! `/tasks/ping`, which relays one health-check request upstream.
//!
//! ```text
//!   Client ──▶ listener ──▶ axum router ──┬─▶ /tasks/ping ──▶ PingRelay ──▶ upstream
//!                                         └─▶ fallback ────▶ RedirectTable ─▶ 301 / 404
//! ```

use std::path::PathBuf;

use clap::Parser;

use legacy_redirects::config::{load_config, validate_config, ConfigError, RelayConfig};
use legacy_redirects::lifecycle::{self, signals, Shutdown};
use legacy_redirects::observability::init_logging;

#[derive(Parser)]
#[command(name = "legacy-redirects")]
#[command(about = "Permanent redirects for legacy blog URLs plus a ping relay", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

fn load(cli: &Cli) -> Result<RelayConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load(&cli)?;

    init_logging(&config.observability);

    tracing::info!("legacy-redirects v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        ping_target = %config.ping.target_url,
        ping_timeout_secs = config.ping.timeout_secs,
        schedule_enabled = config.ping.schedule_enabled,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    signals::install(shutdown.clone());

    if let Err(e) = lifecycle::start(config, &shutdown).await {
        tracing::error!(error = %e, "Server exited with error");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
