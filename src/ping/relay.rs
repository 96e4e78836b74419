//! Outbound ping with a deadline.
//!
//! # Responsibilities
//! - Issue a single GET to the configured ping target
//! - Follow a bounded number of redirects, over http or https
//! - Bound connect, redirects, headers and body read by one deadline
//! - Render the outcome as `HTTP <code> - <body>` or `ERROR: no response`

use std::time::Duration;

use axum::http::StatusCode;
use reqwest::{redirect, Url};
use thiserror::Error;
use tokio::time;

use crate::config::PingConfig;

/// Text rendered when the upstream could not be reached.
pub const NO_RESPONSE: &str = "ERROR: no response";

/// Upper bound on the upstream body we are willing to buffer.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Redirect hops followed before giving up.
pub const MAX_REDIRECTS: usize = 5;

/// Reasons an outbound ping produced no usable reply.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid ping target {0:?}")]
    InvalidTarget(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response body exceeds {0} bytes")]
    BodyTooLarge(usize),

    #[error("no response within {0:?}")]
    Timeout(Duration),
}

/// Raw reply received from the ping target, after redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedReply {
    pub status: StatusCode,
    pub body: String,
}

/// What a ping invocation reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PingOutcome {
    /// Upstream answered; `body` is already trimmed.
    Reply { status: StatusCode, body: String },
    /// Upstream could not be reached in time.
    NoResponse,
}

impl PingOutcome {
    /// Text served to the caller.
    pub fn render(&self) -> String {
        match self {
            PingOutcome::Reply { status, body } => format!("HTTP {} - {}", status.as_u16(), body),
            PingOutcome::NoResponse => NO_RESPONSE.to_string(),
        }
    }
}

impl From<Result<FetchedReply, FetchError>> for PingOutcome {
    fn from(result: Result<FetchedReply, FetchError>) -> Self {
        match result {
            Ok(reply) => PingOutcome::Reply {
                status: reply.status,
                body: reply.body.trim().to_string(),
            },
            Err(_) => PingOutcome::NoResponse,
        }
    }
}

/// Performs the outbound ping. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct PingRelay {
    client: reqwest::Client,
    target: String,
    timeout: Duration,
}

impl PingRelay {
    pub fn new(config: &PingConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(config.user_agent.as_str())
            .no_proxy()
            .build()?;

        Ok(Self {
            client,
            target: config.target_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// Override the deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Ping the target once and report the outcome. Never fails.
    pub async fn ping(&self) -> PingOutcome {
        let result = self.fetch().await;
        match &result {
            Ok(reply) => {
                tracing::info!(target_url = %self.target, status = %reply.status, "Ping answered");
            }
            Err(e) => {
                tracing::warn!(target_url = %self.target, error = %e, "Ping failed");
            }
        }
        PingOutcome::from(result)
    }

    /// Fetch the target, treating an elapsed deadline as an error.
    pub async fn fetch(&self) -> Result<FetchedReply, FetchError> {
        match time::timeout(self.timeout, self.fetch_inner()).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.timeout)),
        }
    }

    async fn fetch_inner(&self) -> Result<FetchedReply, FetchError> {
        let url = Url::parse(&self.target)
            .map_err(|_| FetchError::InvalidTarget(self.target.clone()))?;

        let mut response = self.client.get(url).send().await?;
        let status = response.status();

        let mut bytes = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if bytes.len() + chunk.len() > MAX_BODY_BYTES {
                return Err(FetchError::BodyTooLarge(MAX_BODY_BYTES));
            }
            bytes.extend_from_slice(&chunk);
        }

        Ok(FetchedReply {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}
