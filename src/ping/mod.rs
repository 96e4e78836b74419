//! Ping relay subsystem.
//!
//! # Data Flow
//! ```text
//! GET /tasks/ping  ─┐
//!                   ├─→ relay.rs (one GET with deadline)
//! scheduler tick ───┘       → PingOutcome (Reply | NoResponse)
//!                           → rendered as plain text
//! ```
//!
//! # Design Decisions
//! - One outbound call per invocation, no retries, no caching
//! - Every fetch failure collapses into the same `ERROR: no response` text
//! - The scheduler reuses the request-path relay unchanged

pub mod relay;
pub mod scheduler;

pub use relay::{FetchError, FetchedReply, PingOutcome, PingRelay, NO_RESPONSE};
pub use scheduler::PingScheduler;
