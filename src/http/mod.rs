//! HTTP integration subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → request.rs (snapshot method, path, headers)
//!     → handler produces the response (may attach a CacheOverride)
//!     → middleware.rs (finalization: engine resolves, headers written)
//!     → response leaves the process
//! ```

pub mod layer;
pub mod middleware;
pub mod request;

pub use layer::RoutePolicyLayer;
pub use middleware::cache_header_middleware;
pub use request::RequestInfo;
