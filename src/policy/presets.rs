//! Named caching scenarios mapped to fixed directive sets.
//!
//! The enumeration is closed: every preset is known at compile time and an
//! unrecognized name fails with [`PolicyError::UnknownPreset`] when parsed,
//! never silently ignored. Preset contents are established once and
//! read-only for the lifetime of the process.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::directives::{DirectiveSet, Scope};
use super::error::PolicyError;

/// A named, pre-defined directive set for a common caching scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Fingerprinted assets: cache aggressively, everywhere, forever.
    Static,
    /// API responses: revalidate with the origin before every reuse.
    Api,
    /// Live data: never store anywhere.
    Realtime,
    /// Rendered pages: short shared-cache life with background refresh.
    Page,
    /// Per-user content: browser-only, revalidated.
    PrivateUserData,
}

impl Preset {
    /// The fixed directive set this preset stands for.
    pub fn directives(self) -> DirectiveSet {
        match self {
            Preset::Static => DirectiveSet {
                public: true,
                max_age: Some(31_536_000.0),
                immutable: true,
                ..DirectiveSet::default()
            },
            Preset::Api => DirectiveSet {
                no_cache: Scope::Flag(true),
                must_revalidate: true,
                max_age: Some(0.0),
                ..DirectiveSet::default()
            },
            Preset::Realtime => DirectiveSet {
                no_store: true,
                ..DirectiveSet::default()
            },
            Preset::Page => DirectiveSet {
                public: true,
                max_age: Some(0.0),
                s_maxage: Some(300.0),
                stale_while_revalidate: Some(60.0),
                ..DirectiveSet::default()
            },
            Preset::PrivateUserData => DirectiveSet {
                private: Scope::Flag(true),
                no_cache: Scope::Flag(true),
                max_age: Some(0.0),
                ..DirectiveSet::default()
            },
        }
    }

    /// The configuration-facing name of this preset.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Static => "static",
            Preset::Api => "api",
            Preset::Realtime => "realtime",
            Preset::Page => "page",
            Preset::PrivateUserData => "private-user-data",
        }
    }
}

impl FromStr for Preset {
    type Err = PolicyError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "static" => Ok(Preset::Static),
            "api" => Ok(Preset::Api),
            "realtime" => Ok(Preset::Realtime),
            "page" => Ok(Preset::Page),
            "private-user-data" => Ok(Preset::PrivateUserData),
            other => Err(PolicyError::UnknownPreset(other.to_string())),
        }
    }
}
