//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, all errors at once)
//!     → CacheConfig (validated)
//!     → CacheHeaderEngine::from_config (compiled, immutable)
//!     → shared via Arc across responses
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the engine never observes changes
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{CacheConfig, CdnConfig, PolicyConfig, RuleConfig};
pub use validation::{validate_config, ValidationError};
