//! Resolution orchestration.
//!
//! # Responsibilities
//! - Own the four-tier priority chain (override → route → rules → default)
//! - Gate on method/status allow-lists and the engine kill-switch
//! - Validate and serialize the winning directive set
//! - Write Cache-Control, Vary, and the CDN header on the response
//!
//! # Design Decisions
//! - An existing Cache-Control value short-circuits everything, above even
//!   the override tier
//! - Explicit disable stops the tier search like any other defined outcome
//! - Validation precedes every write, so a failing set never leaves a
//!   half-written header

use axum::http::{header, HeaderName, HeaderValue, Method, Response};

use crate::config::loader::ConfigError;
use crate::config::schema::CacheConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::http::request::RequestInfo;
use crate::policy::{derive_vary_fields, merge_vary, serialize, validate, DirectiveSet, PolicyError};
use crate::rules::{Rule, RouteMatcher, RuleSet};

use super::outcome::{Applied, CachePolicy, Resolution};

/// Environment flag that disables the engine regardless of configuration.
pub const DISABLE_ENV: &str = "CACHE_HEADERS_DISABLE";

/// The immutable, compiled engine.
///
/// Built once at startup and shared via `Arc` across concurrently handled
/// responses; nothing in here is mutated after construction, so no locking
/// is needed.
#[derive(Debug, Clone)]
pub struct CacheHeaderEngine {
    enabled: bool,
    methods: Vec<Method>,
    statuses: Vec<u16>,
    rules: RuleSet,
    default_policy: Option<CachePolicy>,
    auto_vary: bool,
    cdn: Option<CdnTarget>,
}

#[derive(Debug, Clone)]
struct CdnTarget {
    header: HeaderName,
    directives: DirectiveSet,
}

impl Default for CacheHeaderEngine {
    fn default() -> Self {
        Self {
            enabled: !env_disabled(),
            methods: vec![Method::GET, Method::HEAD],
            statuses: vec![200, 201, 204, 206, 301, 302, 303, 304, 307, 308],
            rules: RuleSet::default(),
            default_policy: None,
            auto_vary: true,
            cdn: None,
        }
    }
}

impl CacheHeaderEngine {
    /// An engine with default allow-lists, no rules, and no default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a configuration into an engine.
    ///
    /// Validation reports every semantic problem at once; a validated
    /// configuration compiles without further errors.
    pub fn from_config(config: &CacheConfig) -> Result<Self, ConfigError> {
        validate_config(config).map_err(ConfigError::Validation)?;

        let mut methods = Vec::new();
        for name in &config.methods {
            let method = Method::from_bytes(name.as_bytes())
                .map_err(|_| invalid(ValidationError::Method(name.clone())))?;
            methods.push(method);
        }

        let mut rules = RuleSet::default();
        for (index, rule) in config.rules.iter().enumerate() {
            let matcher = match (&rule.pattern, &rule.regex) {
                (Some(pattern), None) => RouteMatcher::pattern(pattern.clone()),
                (None, Some(source)) => {
                    let regex = regex::Regex::new(source).map_err(|err| {
                        invalid(ValidationError::Rule {
                            index,
                            problem: format!("invalid regex: {err}"),
                        })
                    })?;
                    RouteMatcher::Regex(regex)
                }
                _ => {
                    return Err(invalid(ValidationError::Rule {
                        index,
                        problem: "needs exactly one of 'pattern' or 'regex'".to_string(),
                    }))
                }
            };
            let policy = rule.policy().ok_or_else(|| {
                invalid(ValidationError::Rule {
                    index,
                    problem: "needs exactly one of 'preset', 'directives', 'disable'".to_string(),
                })
            })?;
            rules.push(Rule::new(matcher, policy));
        }

        let cdn = match &config.cdn {
            Some(cdn) => Some(CdnTarget {
                header: HeaderName::from_bytes(cdn.header.as_bytes())
                    .map_err(|_| invalid(ValidationError::CdnHeader(cdn.header.clone())))?,
                directives: cdn.directives.clone(),
            }),
            None => None,
        };

        let engine = Self {
            enabled: config.enabled && !env_disabled(),
            methods,
            statuses: config.statuses.clone(),
            rules,
            default_policy: config.default.as_ref().and_then(|p| p.to_policy()),
            auto_vary: config.auto_vary,
            cdn,
        };
        tracing::debug!(
            enabled = engine.enabled,
            rules = engine.rules.len(),
            has_default = engine.default_policy.is_some(),
            "Cache header engine compiled"
        );
        Ok(engine)
    }

    /// Set the global default policy, the last tier of resolution.
    pub fn with_default_policy(mut self, policy: impl Into<CachePolicy>) -> Self {
        self.default_policy = Some(policy.into());
        self
    }

    /// Append one pattern rule. Rules keep their insertion order.
    pub fn with_rule(mut self, matcher: RouteMatcher, policy: impl Into<CachePolicy>) -> Self {
        self.rules.push(Rule::new(matcher, policy));
        self
    }

    /// Replace the method allow-list.
    pub fn with_methods(mut self, methods: Vec<Method>) -> Self {
        self.methods = methods;
        self
    }

    /// Replace the status allow-list.
    pub fn with_statuses(mut self, statuses: Vec<u16>) -> Self {
        self.statuses = statuses;
        self
    }

    /// Toggle automatic Vary derivation.
    pub fn with_auto_vary(mut self, on: bool) -> Self {
        self.auto_vary = on;
        self
    }

    /// Configure the secondary CDN directive set and its header name.
    pub fn with_cdn(mut self, header: HeaderName, directives: DirectiveSet) -> Self {
        self.cdn = Some(CdnTarget { header, directives });
        self
    }

    /// Walk the priority chain for one response.
    ///
    /// Pure over its inputs; the first tier with a defined policy wins and
    /// explicit disable stops the search like any other outcome.
    pub fn resolve(
        &self,
        request: &RequestInfo,
        override_policy: Option<&CachePolicy>,
        route_policy: Option<&CachePolicy>,
    ) -> Resolution {
        let winner = override_policy
            .or(route_policy)
            .or_else(|| self.rules.first_match(request))
            .or(self.default_policy.as_ref());

        match winner {
            None => Resolution::Unset,
            Some(CachePolicy::Disable) => Resolution::Disable,
            Some(CachePolicy::Preset(preset)) => Resolution::Directives(preset.directives()),
            Some(CachePolicy::Directives(set)) => Resolution::Directives(set.clone()),
        }
    }

    /// Run the full finalization step against one response.
    ///
    /// Invoked exactly once per response, after the handler has produced
    /// its result and before bytes are sent. Errors are caller
    /// configuration mistakes and propagate to the host framework's error
    /// path; nothing is written when validation fails.
    pub fn apply<B>(
        &self,
        request: &RequestInfo,
        override_policy: Option<&CachePolicy>,
        route_policy: Option<&CachePolicy>,
        response: &mut Response<B>,
    ) -> Result<Applied, PolicyError> {
        if response.headers().contains_key(header::CACHE_CONTROL) {
            tracing::debug!(
                path = %request.path(),
                "Cache-Control already set by the handler, leaving it untouched"
            );
            return Ok(Applied::Skipped);
        }
        if !self.enabled {
            return Ok(Applied::Skipped);
        }
        if !self.methods.contains(request.method()) {
            tracing::debug!(path = %request.path(), method = %request.method(), "Method not eligible for cache headers");
            return Ok(Applied::Skipped);
        }
        let status = response.status().as_u16();
        if !self.statuses.contains(&status) {
            tracing::debug!(path = %request.path(), status, "Status not eligible for cache headers");
            return Ok(Applied::Skipped);
        }

        match self.resolve(request, override_policy, route_policy) {
            Resolution::Unset => Ok(Applied::Skipped),
            Resolution::Disable => {
                response
                    .headers_mut()
                    .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
                Ok(Applied::Disabled)
            }
            Resolution::Directives(set) => {
                validate(&set)?;
                let value = serialize(&set);
                if !value.is_empty() {
                    response
                        .headers_mut()
                        .insert(header::CACHE_CONTROL, HeaderValue::from_str(&value)?);
                    if self.auto_vary {
                        self.write_vary(&set, response)?;
                    }
                }
                if let Some(cdn) = &self.cdn {
                    validate(&cdn.directives)?;
                    let cdn_value = serialize(&cdn.directives);
                    if !cdn_value.is_empty() {
                        response
                            .headers_mut()
                            .insert(cdn.header.clone(), HeaderValue::from_str(&cdn_value)?);
                    }
                }
                Ok(Applied::Written)
            }
        }
    }

    fn write_vary<B>(
        &self,
        set: &DirectiveSet,
        response: &mut Response<B>,
    ) -> Result<(), PolicyError> {
        let derived = derive_vary_fields(set);
        if derived.is_empty() {
            return Ok(());
        }

        let existing: Vec<String> = response
            .headers()
            .get_all(header::VARY)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','))
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        let merged = merge_vary(existing, derived);
        response
            .headers_mut()
            .insert(header::VARY, HeaderValue::from_str(&merged.join(", "))?);
        Ok(())
    }
}

fn invalid(error: ValidationError) -> ConfigError {
    ConfigError::Validation(vec![error])
}

/// Runtime kill-switch, read once at engine construction.
fn env_disabled() -> bool {
    std::env::var(DISABLE_ENV)
        .map(|value| is_truthy(&value))
        .unwrap_or(false)
}

fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false")
}
