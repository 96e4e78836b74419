//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → handed by value to the server and the ping scheduler
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; an absent file means the built-in settings
//! - Validation separates syntactic (serde) from semantic checks
//! - The redirect table is compiled in and never read from config

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, PingConfig, RelayConfig};
pub use validation::{validate_config, ValidationError};
