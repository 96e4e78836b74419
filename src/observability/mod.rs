//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers, relay, scheduler, lifecycle
//!     → tracing events (request ID, path, ping outcome)
//!     → logging.rs subscriber (EnvFilter + fmt)
//!     → stdout
//! ```

pub mod logging;

pub use logging::init_logging;
