//! Rule matching logic.
//!
//! # Responsibilities
//! - Decide whether one rule applies to a request
//! - Compile string patterns once, at construction time
//!
//! # Design Decisions
//! - Matcher kinds are a closed enum dispatched by exhaustive match
//! - Bare strings use prefix semantics so a directory-style rule catches
//!   nested paths
//! - Wildcard patterns are anchored to the full path; everything around
//!   the `*` is matched literally

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::http::request::RequestInfo;

/// Predicate signature for caller-supplied matchers.
pub type MatchPredicate = Arc<dyn Fn(&RequestInfo) -> bool + Send + Sync>;

/// One way of deciding whether a rule applies to a request.
#[derive(Clone)]
pub enum RouteMatcher {
    /// Exact path or path prefix.
    Prefix(String),
    /// Anchored glob compiled from a string containing `*`.
    Wildcard { pattern: String, compiled: Regex },
    /// Arbitrary regular expression over the raw path.
    Regex(Regex),
    /// Caller-supplied predicate with full discretion over the request.
    Predicate(MatchPredicate),
}

impl RouteMatcher {
    /// Build a matcher from a string pattern.
    ///
    /// A `*` turns the pattern into an anchored glob where the marker
    /// matches any substring; without one the string matches by equality
    /// or prefix.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        if pattern.contains('*') {
            let compiled = compile_wildcard(&pattern);
            RouteMatcher::Wildcard { pattern, compiled }
        } else {
            RouteMatcher::Prefix(pattern)
        }
    }

    /// Wrap a predicate closure.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&RequestInfo) -> bool + Send + Sync + 'static,
    {
        RouteMatcher::Predicate(Arc::new(predicate))
    }

    /// Returns true if the request matches this condition.
    pub fn matches(&self, request: &RequestInfo) -> bool {
        match self {
            RouteMatcher::Prefix(prefix) => request.path().starts_with(prefix.as_str()),
            RouteMatcher::Wildcard { compiled, .. } => compiled.is_match(request.path()),
            RouteMatcher::Regex(regex) => regex.is_match(request.path()),
            RouteMatcher::Predicate(predicate) => predicate(request),
        }
    }
}

fn compile_wildcard(pattern: &str) -> Regex {
    let literal_parts: Vec<String> = pattern.split('*').map(regex::escape).collect();
    let source = format!("^{}$", literal_parts.join(".*"));
    Regex::new(&source).expect("escaped wildcard pattern is a valid regex")
}

impl fmt::Debug for RouteMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteMatcher::Prefix(prefix) => f.debug_tuple("Prefix").field(prefix).finish(),
            RouteMatcher::Wildcard { pattern, .. } => {
                f.debug_tuple("Wildcard").field(pattern).finish()
            }
            RouteMatcher::Regex(regex) => f.debug_tuple("Regex").field(&regex.as_str()).finish(),
            RouteMatcher::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}
