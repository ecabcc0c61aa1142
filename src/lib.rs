//! Cache header resolution library.
//!
//! Computes the `Cache-Control` (and optional CDN cache directive) header
//! for outgoing responses from layered configuration sources: a
//! per-response override, per-route static policy, ordered URL-pattern
//! rules, and a global default. Derives `Vary` from field-scoped privacy
//! directives. Mounted as an axum middleware at the finalization point.

pub mod config;
pub mod http;
pub mod policy;
pub mod resolve;
pub mod rules;

pub use config::{load_config, CacheConfig, ConfigError};
pub use http::{cache_header_middleware, RequestInfo, RoutePolicyLayer};
pub use policy::{DirectiveSet, PolicyError, Preset, Scope};
pub use resolve::{Applied, CacheHeaderEngine, CacheOverride, CachePolicy, Resolution, RoutePolicy};
pub use rules::{Rule, RouteMatcher, RuleSet};
