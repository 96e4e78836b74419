//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Defaults reproduce the production deployment, so an empty file is valid.

use serde::{Deserialize, Serialize};

/// Default outbound ping endpoint.
pub const DEFAULT_PING_TARGET: &str = "http://bionicspirit.com/ping";

/// Default deadline for the outbound ping, in seconds.
pub const DEFAULT_PING_TIMEOUT_SECS: u64 = 30;

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Outbound ping settings.
    pub ping: PingConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Ping relay configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PingConfig {
    /// Endpoint fetched by `/tasks/ping`; http or https, redirects followed.
    pub target_url: String,

    /// Deadline for the whole fetch (connect, headers and body) in seconds.
    pub timeout_secs: u64,

    /// User-Agent sent upstream.
    pub user_agent: String,

    /// Run the relay on a timer in the background.
    pub schedule_enabled: bool,

    /// Interval between scheduled pings in seconds.
    pub schedule_interval_secs: u64,
}

impl Default for PingConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_PING_TARGET.to_string(),
            timeout_secs: DEFAULT_PING_TIMEOUT_SECS,
            user_agent: concat!("legacy-redirects/", env!("CARGO_PKG_VERSION")).to_string(),
            schedule_enabled: false,
            schedule_interval_secs: 600,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
