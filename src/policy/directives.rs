//! The structured representation of Cache-Control semantics.

use serde::{Deserialize, Serialize};

/// A scoped directive (`private`, `no-cache`): either a plain flag or a
/// list of the header fields it applies to.
///
/// An empty field list behaves like an absent flag, while `Flag(true)`
/// still serializes as the bare token. The asymmetry is observable wire
/// behavior and is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Scope {
    Flag(bool),
    Fields(Vec<String>),
}

impl Scope {
    /// True when the directive should appear in the serialized header.
    pub fn is_enabled(&self) -> bool {
        match self {
            Scope::Flag(on) => *on,
            Scope::Fields(fields) => !fields.is_empty(),
        }
    }

    /// The field names this directive is scoped to, when it has any.
    pub fn fields(&self) -> Option<&[String]> {
        match self {
            Scope::Fields(fields) if !fields.is_empty() => Some(fields),
            _ => None,
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Scope::Flag(false)
    }
}

impl From<bool> for Scope {
    fn from(on: bool) -> Self {
        Scope::Flag(on)
    }
}

impl From<Vec<String>> for Scope {
    fn from(fields: Vec<String>) -> Self {
        Scope::Fields(fields)
    }
}

impl From<Vec<&str>> for Scope {
    fn from(fields: Vec<&str>) -> Self {
        Scope::Fields(fields.into_iter().map(String::from).collect())
    }
}

/// An immutable record of optional Cache-Control semantics.
///
/// Durations stay fractional until serialization; negative values are
/// rejected by [`validate`](crate::policy::validate::validate).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct DirectiveSet {
    pub public: bool,
    pub private: Scope,
    pub no_cache: Scope,
    pub no_store: bool,
    pub no_transform: bool,
    pub must_revalidate: bool,
    pub proxy_revalidate: bool,
    pub must_understand: bool,
    pub immutable: bool,
    pub max_age: Option<f64>,
    pub s_maxage: Option<f64>,
    pub stale_while_revalidate: Option<f64>,
    pub stale_if_error: Option<f64>,
}

impl DirectiveSet {
    /// An entirely absent set (serializes to the empty string).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_public(mut self) -> Self {
        self.public = true;
        self
    }

    pub fn with_private(mut self, scope: impl Into<Scope>) -> Self {
        self.private = scope.into();
        self
    }

    pub fn with_no_cache(mut self, scope: impl Into<Scope>) -> Self {
        self.no_cache = scope.into();
        self
    }

    pub fn with_no_store(mut self) -> Self {
        self.no_store = true;
        self
    }

    pub fn with_no_transform(mut self) -> Self {
        self.no_transform = true;
        self
    }

    pub fn with_must_revalidate(mut self) -> Self {
        self.must_revalidate = true;
        self
    }

    pub fn with_proxy_revalidate(mut self) -> Self {
        self.proxy_revalidate = true;
        self
    }

    pub fn with_must_understand(mut self) -> Self {
        self.must_understand = true;
        self
    }

    pub fn with_immutable(mut self) -> Self {
        self.immutable = true;
        self
    }

    pub fn with_max_age(mut self, secs: f64) -> Self {
        self.max_age = Some(secs);
        self
    }

    pub fn with_s_maxage(mut self, secs: f64) -> Self {
        self.s_maxage = Some(secs);
        self
    }

    pub fn with_stale_while_revalidate(mut self, secs: f64) -> Self {
        self.stale_while_revalidate = Some(secs);
        self
    }

    pub fn with_stale_if_error(mut self, secs: f64) -> Self {
        self.stale_if_error = Some(secs);
        self
    }
}
