//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! engine. All types derive Serde traits for deserialization from config
//! files, and every field has a default so minimal configs stay minimal.

use serde::{Deserialize, Serialize};

use crate::policy::{DirectiveSet, Preset};
use crate::resolve::outcome::CachePolicy;

/// Root configuration for the cache header engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Master toggle; the `CACHE_HEADERS_DISABLE` environment flag wins
    /// over it.
    pub enabled: bool,

    /// Global fallback policy, consulted after every other tier.
    pub default: Option<PolicyConfig>,

    /// Methods eligible for header injection.
    pub methods: Vec<String>,

    /// Status codes eligible for header injection.
    pub statuses: Vec<u16>,

    /// Ordered pattern rules; first match wins.
    pub rules: Vec<RuleConfig>,

    /// Derive a `Vary` header from scoped field lists.
    pub auto_vary: bool,

    /// Secondary directive set for shared/CDN caches.
    pub cdn: Option<CdnConfig>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default: None,
            methods: vec!["GET".to_string(), "HEAD".to_string()],
            statuses: vec![200, 201, 204, 206, 301, 302, 303, 304, 307, 308],
            rules: Vec::new(),
            auto_vary: true,
            cdn: None,
        }
    }
}

/// A policy any tier can specify: `false` to disable caching, a preset
/// name, or an inline directive table.
///
/// `true` has no meaning and is rejected during validation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PolicyConfig {
    Toggle(bool),
    Preset(Preset),
    Directives(DirectiveSet),
}

impl PolicyConfig {
    /// Convert to the runtime policy. `Toggle(true)` converts to nothing;
    /// validation reports it before an engine is built.
    pub fn to_policy(&self) -> Option<CachePolicy> {
        match self {
            PolicyConfig::Toggle(false) => Some(CachePolicy::Disable),
            PolicyConfig::Toggle(true) => None,
            PolicyConfig::Preset(preset) => Some(CachePolicy::Preset(*preset)),
            PolicyConfig::Directives(set) => Some(CachePolicy::Directives(set.clone())),
        }
    }
}

/// One pattern rule: a matcher plus exactly one outcome.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RuleConfig {
    /// String pattern: prefix semantics, or an anchored glob when it
    /// contains `*`.
    pub pattern: Option<String>,

    /// Regular expression tested against the raw path.
    pub regex: Option<String>,

    /// Apply this preset.
    pub preset: Option<Preset>,

    /// Apply this inline directive set.
    pub directives: Option<DirectiveSet>,

    /// Explicitly disable caching for matching paths.
    pub disable: bool,
}

impl RuleConfig {
    /// The rule's outcome, when it names exactly one.
    pub fn policy(&self) -> Option<CachePolicy> {
        match (&self.preset, &self.directives, self.disable) {
            (Some(preset), None, false) => Some(CachePolicy::Preset(*preset)),
            (None, Some(set), false) => Some(CachePolicy::Directives(set.clone())),
            (None, None, true) => Some(CachePolicy::Disable),
            _ => None,
        }
    }
}

/// CDN cache directive configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CdnConfig {
    /// Output header name.
    pub header: String,

    /// Directive set serialized under that header.
    pub directives: DirectiveSet,
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            header: "CDN-Cache-Control".to_string(),
            directives: DirectiveSet::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Scope;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: CacheConfig = toml::from_str("").unwrap();
        assert!(config.enabled);
        assert!(config.auto_vary);
        assert_eq!(config.methods, vec!["GET", "HEAD"]);
        assert!(config.statuses.contains(&304));
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_default_tier_accepts_every_policy_shape() {
        let config: CacheConfig = toml::from_str(r#"default = "page""#).unwrap();
        assert_eq!(config.default, Some(PolicyConfig::Preset(Preset::Page)));

        let config: CacheConfig = toml::from_str("default = false").unwrap();
        assert_eq!(config.default, Some(PolicyConfig::Toggle(false)));
        assert_eq!(config.default.unwrap().to_policy(), Some(CachePolicy::Disable));

        let config: CacheConfig = toml::from_str(
            r#"
            [default]
            public = true
            max-age = 3600
            "#,
        )
        .unwrap();
        match config.default {
            Some(PolicyConfig::Directives(set)) => {
                assert!(set.public);
                assert_eq!(set.max_age, Some(3600.0));
            }
            other => panic!("expected inline directives, got {other:?}"),
        }
    }

    #[test]
    fn test_rules_deserialize_in_declaration_order() {
        let config: CacheConfig = toml::from_str(
            r#"
            [[rules]]
            pattern = "/api/public/*"
            preset = "static"

            [[rules]]
            pattern = "/api/*"
            disable = true

            [[rules]]
            regex = '^/assets/.+\.js$'
            [rules.directives]
            public = true
            max-age = 86400
            "#,
        )
        .unwrap();
        assert_eq!(config.rules.len(), 3);
        assert_eq!(config.rules[0].pattern.as_deref(), Some("/api/public/*"));
        assert_eq!(config.rules[1].policy(), Some(CachePolicy::Disable));
        assert!(config.rules[2].regex.is_some());
    }

    #[test]
    fn test_rule_with_multiple_outcomes_has_no_policy() {
        let rule = RuleConfig {
            pattern: Some("/x".into()),
            preset: Some(Preset::Api),
            disable: true,
            ..RuleConfig::default()
        };
        assert_eq!(rule.policy(), None);
    }

    #[test]
    fn test_cdn_defaults_to_standard_header_name() {
        let config: CacheConfig = toml::from_str(
            r#"
            [cdn.directives]
            public = true
            s-maxage = 600
            "#,
        )
        .unwrap();
        let cdn = config.cdn.unwrap();
        assert_eq!(cdn.header, "CDN-Cache-Control");
        assert_eq!(cdn.directives.s_maxage, Some(600.0));
    }

    #[test]
    fn test_unknown_preset_fails_at_parse_time() {
        let result = toml::from_str::<CacheConfig>(
            r#"
            [[rules]]
            pattern = "/x"
            preset = "aggressive"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_scoped_directives_from_toml() {
        let config: CacheConfig = toml::from_str(
            r#"
            [default]
            private = ["cookie", "authorization"]
            max-age = 0
            "#,
        )
        .unwrap();
        match config.default {
            Some(PolicyConfig::Directives(set)) => {
                assert_eq!(
                    set.private,
                    Scope::Fields(vec!["cookie".into(), "authorization".into()])
                );
            }
            other => panic!("expected inline directives, got {other:?}"),
        }
    }
}
