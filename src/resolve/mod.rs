//! Resolution subsystem.
//!
//! # Data Flow
//! ```text
//! RequestInfo + override + route policy
//!     → engine.rs (tier walk: override → route → rules → default)
//!     → outcome.rs (Resolution: unset, disable, or a directive set)
//!     → policy::{validate, serialize, vary}
//!     → headers written on the response
//! ```
//!
//! # Design Decisions
//! - One resolution per response, at finalization time, fully synchronous
//! - A pre-existing Cache-Control value wins over every tier
//! - Errors propagate to the caller; no retries, no partial writes

pub mod engine;
pub mod outcome;

pub use engine::{CacheHeaderEngine, DISABLE_ENV};
pub use outcome::{Applied, CacheOverride, CachePolicy, Resolution, RoutePolicy};
