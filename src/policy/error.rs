//! Error types for directive validation and policy resolution.

use thiserror::Error;

/// Errors raised while validating or serializing cache directives.
///
/// All variants are deterministic caller-configuration errors: they are
/// never retried and propagate synchronously out of the resolution call.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// A directive set declared both `public` and a truthy `private`.
    #[error("cache-control cannot be both 'public' and 'private'")]
    ConflictingVisibility,

    /// A duration directive was given a negative number of seconds.
    #[error("directive '{directive}' must be a non-negative number of seconds, got {value}")]
    NegativeDuration {
        directive: &'static str,
        value: f64,
    },

    /// A preset name outside the closed enumeration.
    #[error("unknown cache preset '{0}'")]
    UnknownPreset(String),

    /// A serialized directive or merged Vary value was not a valid header value.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] axum::http::header::InvalidHeaderValue),
}
