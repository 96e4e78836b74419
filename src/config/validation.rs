//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Reject ping targets that are not absolute http(s) URLs
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use reqwest::Url;
use thiserror::Error;

use crate::config::schema::RelayConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Longest accepted ping deadline: one hour.
pub const MAX_PING_TIMEOUT_SECS: u64 = 60 * 60;

/// Longest accepted schedule interval: one day.
pub const MAX_SCHEDULE_INTERVAL_SECS: u64 = 24 * 60 * 60;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    BindAddress(String),

    #[error("ping.target_url {0:?} is not a valid URL")]
    TargetUri(String),

    #[error("ping.target_url {0:?} must be an http:// or https:// URL with a host")]
    TargetScheme(String),

    #[error("ping.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("ping.timeout_secs {0} exceeds the maximum of {max}", max = MAX_PING_TIMEOUT_SECS)]
    TimeoutTooLarge(u64),

    #[error("ping.schedule_interval_secs must be greater than zero when scheduling is enabled")]
    ZeroInterval,

    #[error("ping.schedule_interval_secs {0} exceeds the maximum of {max}", max = MAX_SCHEDULE_INTERVAL_SECS)]
    IntervalTooLarge(u64),

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    LogLevel(String),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    let target = &config.ping.target_url;
    match Url::parse(target) {
        Ok(url) => {
            if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
                errors.push(ValidationError::TargetScheme(target.clone()));
            }
        }
        Err(_) => errors.push(ValidationError::TargetUri(target.clone())),
    }

    match config.ping.timeout_secs {
        0 => errors.push(ValidationError::ZeroTimeout),
        secs if secs > MAX_PING_TIMEOUT_SECS => {
            errors.push(ValidationError::TimeoutTooLarge(secs))
        }
        _ => {}
    }

    if config.ping.schedule_enabled {
        match config.ping.schedule_interval_secs {
            0 => errors.push(ValidationError::ZeroInterval),
            secs if secs > MAX_SCHEDULE_INTERVAL_SECS => {
                errors.push(ValidationError::IntervalTooLarge(secs))
            }
            _ => {}
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
