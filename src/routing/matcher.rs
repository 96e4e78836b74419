//! Path matching for redirect rules.
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Anchored at both ends: the literal, optionally followed by one `/`
//! - Only the URI path is seen; query strings are stripped by the caller

/// Matches a literal path that may carry a single trailing slash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathMatcher {
    literal: &'static str,
}

impl PathMatcher {
    /// Create a matcher for `literal`, which must not end in `/`.
    pub const fn new(literal: &'static str) -> Self {
        Self { literal }
    }

    /// The literal path this matcher accepts.
    pub fn literal(&self) -> &'static str {
        self.literal
    }

    /// Returns true if `path` is the literal, with or without one trailing `/`.
    pub fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.literal) {
            Some(rest) => rest.is_empty() || rest == "/",
            None => false,
        }
    }
}
