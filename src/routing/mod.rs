//! Redirect routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → router.rs (ordered rule scan)
//!     → matcher.rs (literal path, optional trailing slash)
//!     → Return: Found(target) or NotFound
//! ```
//!
//! # Design Decisions
//! - Rules are compiled in, immutable, and shared as a static table
//! - No regex: a literal comparison expresses the whole rule
//! - Deterministic: same input always resolves to the same outcome
//! - First match wins

pub mod matcher;
pub mod router;

pub use matcher::PathMatcher;
pub use router::{resolve, RedirectOutcome, RedirectRule, RedirectTable, LEGACY_RULES};
