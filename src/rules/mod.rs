//! Pattern-rule subsystem.
//!
//! # Data Flow
//! ```text
//! Request path
//!     → rule.rs (sequential scan, declaration order)
//!     → matcher.rs (evaluate one condition: prefix, glob, regex, predicate)
//!     → Return: first matching rule's policy, or fall through
//! ```
//!
//! # Design Decisions
//! - Rules compiled at startup, immutable at runtime
//! - First match wins; later rules are skipped even when they would match
//! - Matcher kinds form a closed enum, no runtime type inspection

pub mod matcher;
pub mod rule;

pub use matcher::RouteMatcher;
pub use rule::{Rule, RuleSet};
