//! Redirect rule lookup.
//!
//! # Responsibilities
//! - Hold the ordered legacy rule table
//! - Resolve a request path to a redirect target
//! - Return explicit NotFound rather than a silent default
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan over a two-entry table

use crate::routing::matcher::PathMatcher;

/// A (path matcher, target URL) pair answered with a permanent redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectRule {
    pub matcher: PathMatcher,
    pub target: &'static str,
}

impl RedirectRule {
    pub const fn new(path: &'static str, target: &'static str) -> Self {
        Self {
            matcher: PathMatcher::new(path),
            target,
        }
    }
}

/// The blog's legacy URLs, in match order.
pub static LEGACY_RULES: [RedirectRule; 2] = [
    RedirectRule::new("/rss", "https://www.bionicspirit.com/atom.xml"),
    RedirectRule::new(
        "/docs/dialer.html",
        "https://www.bionicspirit.com/blog/2009/02/20/tips-for-creating-voip-dialer.html",
    ),
];

/// Result of resolving a path against the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectOutcome {
    Found(&'static str),
    NotFound,
}

/// Ordered, immutable set of redirect rules.
#[derive(Debug, Clone, Copy)]
pub struct RedirectTable {
    rules: &'static [RedirectRule],
}

impl RedirectTable {
    pub const fn new(rules: &'static [RedirectRule]) -> Self {
        Self { rules }
    }

    /// The table serving the blog's legacy URLs.
    pub const fn legacy() -> Self {
        Self::new(&LEGACY_RULES)
    }

    pub fn rules(&self) -> &'static [RedirectRule] {
        self.rules
    }

    /// Find the first rule matching `path`.
    pub fn resolve(&self, path: &str) -> RedirectOutcome {
        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(path))
            .map(|rule| RedirectOutcome::Found(rule.target))
            .unwrap_or(RedirectOutcome::NotFound)
    }
}

impl Default for RedirectTable {
    fn default() -> Self {
        Self::legacy()
    }
}

/// Resolve `path` against the legacy table.
pub fn resolve(path: &str) -> RedirectOutcome {
    RedirectTable::legacy().resolve(path)
}
