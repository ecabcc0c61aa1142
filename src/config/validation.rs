//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic; unknown preset names
//!   and unknown directive keys already fail at parse time)
//! - Check each rule names exactly one matcher and exactly one outcome
//! - Compile-check regular expressions before the engine is built
//! - Validate every inline directive set for conflicts and ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is pure function: CacheConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the engine

use std::fmt;

use axum::http::{HeaderName, Method};
use regex::Regex;

use crate::policy::{validate, PolicyError};

use super::schema::{CacheConfig, PolicyConfig};

/// A single semantic problem found in a configuration.
#[derive(Debug)]
pub enum ValidationError {
    /// A rule is malformed (missing matcher, ambiguous outcome, bad regex).
    Rule { index: usize, problem: String },
    /// A directive set fails semantic validation.
    Directives { context: String, source: PolicyError },
    /// A method allow-list entry is not a valid HTTP method token.
    Method(String),
    /// The CDN header name is not a valid header name.
    CdnHeader(String),
    /// The default tier is set to a meaningless value.
    Default(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Rule { index, problem } => {
                write!(f, "rule #{}: {}", index, problem)
            }
            ValidationError::Directives { context, source } => {
                write!(f, "{}: {}", context, source)
            }
            ValidationError::Method(name) => write!(f, "invalid method '{}'", name),
            ValidationError::CdnHeader(name) => write!(f, "invalid CDN header name '{}'", name),
            ValidationError::Default(problem) => write!(f, "default: {}", problem),
        }
    }
}

/// Validate an entire configuration, collecting every error.
pub fn validate_config(config: &CacheConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match &config.default {
        Some(PolicyConfig::Toggle(true)) => errors.push(ValidationError::Default(
            "'true' has no meaning; use a preset, a directive table, or false".to_string(),
        )),
        Some(PolicyConfig::Directives(set)) => {
            if let Err(source) = validate(set) {
                errors.push(ValidationError::Directives {
                    context: "default".to_string(),
                    source,
                });
            }
        }
        _ => {}
    }

    for (index, rule) in config.rules.iter().enumerate() {
        match (&rule.pattern, &rule.regex) {
            (None, None) => errors.push(ValidationError::Rule {
                index,
                problem: "needs 'pattern' or 'regex'".to_string(),
            }),
            (Some(_), Some(_)) => errors.push(ValidationError::Rule {
                index,
                problem: "'pattern' and 'regex' are mutually exclusive".to_string(),
            }),
            (None, Some(source)) => {
                if let Err(err) = Regex::new(source) {
                    errors.push(ValidationError::Rule {
                        index,
                        problem: format!("invalid regex: {err}"),
                    });
                }
            }
            (Some(_), None) => {}
        }

        let outcomes =
            rule.preset.is_some() as u8 + rule.directives.is_some() as u8 + rule.disable as u8;
        if outcomes != 1 {
            errors.push(ValidationError::Rule {
                index,
                problem: "needs exactly one of 'preset', 'directives', 'disable'".to_string(),
            });
        }

        if let Some(set) = &rule.directives {
            if let Err(source) = validate(set) {
                errors.push(ValidationError::Directives {
                    context: format!("rule #{index}"),
                    source,
                });
            }
        }
    }

    for name in &config.methods {
        if Method::from_bytes(name.as_bytes()).is_err() {
            errors.push(ValidationError::Method(name.clone()));
        }
    }

    if let Some(cdn) = &config.cdn {
        if HeaderName::from_bytes(cdn.header.as_bytes()).is_err() {
            errors.push(ValidationError::CdnHeader(cdn.header.clone()));
        }
        if let Err(source) = validate(&cdn.directives) {
            errors.push(ValidationError::Directives {
                context: "cdn".to_string(),
                source,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RuleConfig;
    use crate::policy::{DirectiveSet, Preset};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&CacheConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_are_collected() {
        let config = CacheConfig {
            default: Some(PolicyConfig::Toggle(true)),
            methods: vec!["GE T".to_string()],
            rules: vec![
                RuleConfig::default(), // no matcher, no outcome
                RuleConfig {
                    pattern: Some("/x".into()),
                    regex: Some("^/x".into()),
                    preset: Some(Preset::Api),
                    ..RuleConfig::default()
                },
            ],
            ..CacheConfig::default()
        };

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_bad_regex_is_reported_with_rule_index() {
        let config = CacheConfig {
            rules: vec![RuleConfig {
                regex: Some("(unclosed".into()),
                disable: true,
                ..RuleConfig::default()
            }],
            ..CacheConfig::default()
        };

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().starts_with("rule #0: invalid regex"));
    }

    #[test]
    fn test_conflicting_rule_directives_are_reported() {
        let config = CacheConfig {
            rules: vec![RuleConfig {
                pattern: Some("/x".into()),
                directives: Some(DirectiveSet::new().with_public().with_private(true)),
                ..RuleConfig::default()
            }],
            ..CacheConfig::default()
        };

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            ValidationError::Directives { ref source, .. }
                if matches!(source, PolicyError::ConflictingVisibility)
        ));
    }

    #[test]
    fn test_invalid_cdn_header_name_is_reported() {
        let config = CacheConfig {
            cdn: Some(crate::config::schema::CdnConfig {
                header: "bad header".to_string(),
                directives: DirectiveSet::new().with_public(),
            }),
            ..CacheConfig::default()
        };

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::CdnHeader(_)));
    }
}
