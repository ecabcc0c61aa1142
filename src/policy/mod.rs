//! Directive-set model and the pure functions over it.
//!
//! # Data Flow
//! ```text
//! DirectiveSet (from preset, rule, route config, or override)
//!     → validate.rs (semantic checks: conflicts, ranges)
//!     → serialize.rs (canonical token order → header value)
//!     → vary.rs (scoped field lists → Vary header names)
//! ```
//!
//! # Design Decisions
//! - Validation is separate from serialization and always runs first
//! - Serialization order is fixed; input construction order is irrelevant
//! - Durations stay fractional until serialization, then round half away
//!   from zero

pub mod directives;
pub mod error;
pub mod presets;
pub mod serialize;
pub mod validate;
pub mod vary;

pub use directives::{DirectiveSet, Scope};
pub use error::PolicyError;
pub use presets::Preset;
pub use serialize::serialize;
pub use validate::validate;
pub use vary::{derive_vary_fields, merge_vary};
