//! Policy sources and the per-response resolved outcome.

use crate::policy::{DirectiveSet, Preset};

/// What any configuration tier may specify for a response: disable
/// caching outright, a named preset, or a concrete directive set.
#[derive(Debug, Clone, PartialEq)]
pub enum CachePolicy {
    /// Explicitly disable caching (serializes as `no-store`).
    Disable,
    /// A named preset from the closed enumeration.
    Preset(Preset),
    /// A concrete directive set, used as-is (owned by the caller, not
    /// defensively copied).
    Directives(DirectiveSet),
}

impl From<Preset> for CachePolicy {
    fn from(preset: Preset) -> Self {
        CachePolicy::Preset(preset)
    }
}

impl From<DirectiveSet> for CachePolicy {
    fn from(set: DirectiveSet) -> Self {
        CachePolicy::Directives(set)
    }
}

/// The single decision produced for one response.
///
/// Constructed fresh per response and discarded as soon as the header is
/// written; it has no identity beyond one request/response cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// No tier yielded a defined outcome; emit nothing.
    Unset,
    /// Explicit disable; forces `no-store` and stops the tier search.
    Disable,
    /// Serialize this set.
    Directives(DirectiveSet),
}

/// What finalization actually did to the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Resolution was skipped or yielded nothing; response untouched.
    Skipped,
    /// Explicit disable: wrote `Cache-Control: no-store`.
    Disabled,
    /// Wrote a serialized directive set (and possibly Vary and the CDN
    /// header).
    Written,
}

/// Per-response override a handler sets before the response is finalized.
///
/// Insert it into the response extensions; the finalization middleware
/// removes and applies it. The last insertion wins, and nothing takes
/// effect until the finalization step runs.
#[derive(Debug, Clone)]
pub struct CacheOverride(CachePolicy);

impl CacheOverride {
    /// Override with a preset or an explicit directive set.
    pub fn new(policy: impl Into<CachePolicy>) -> Self {
        Self(policy.into())
    }

    /// Shortcut for explicit disable.
    pub fn disable() -> Self {
        Self(CachePolicy::Disable)
    }

    /// Shortcut for a long-lived public immutable asset.
    pub fn static_asset() -> Self {
        Self(CachePolicy::Preset(Preset::Static))
    }

    pub fn policy(&self) -> &CachePolicy {
        &self.0
    }
}

/// Inert per-route policy.
///
/// Attach it to a route with
/// [`RoutePolicyLayer`](crate::http::layer::RoutePolicyLayer); it is read
/// only by the route tier of resolution, after the override tier.
#[derive(Debug, Clone)]
pub struct RoutePolicy(CachePolicy);

impl RoutePolicy {
    pub fn new(policy: impl Into<CachePolicy>) -> Self {
        Self(policy.into())
    }

    /// A route that must never emit cache headers.
    pub fn disable() -> Self {
        Self(CachePolicy::Disable)
    }

    pub fn policy(&self) -> &CachePolicy {
        &self.0
    }
}
