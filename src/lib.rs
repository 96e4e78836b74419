//! Legacy URL redirects and ping relay for bionicspirit.com.
//!
//! - `routing`: static redirect table for old blog paths
//! - `ping`: one-shot upstream ping, optionally on a timer
//! - `http`: axum server wiring both together

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod ping;
pub mod routing;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use ping::{PingOutcome, PingRelay};
pub use routing::{resolve, RedirectOutcome};
