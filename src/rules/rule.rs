//! Ordered rule list with first-match-wins selection.

use crate::http::request::RequestInfo;
use crate::resolve::outcome::CachePolicy;

use super::matcher::RouteMatcher;

/// An ordered (matcher, policy) pair.
#[derive(Debug, Clone)]
pub struct Rule {
    matcher: RouteMatcher,
    policy: CachePolicy,
}

impl Rule {
    pub fn new(matcher: RouteMatcher, policy: impl Into<CachePolicy>) -> Self {
        Self {
            matcher,
            policy: policy.into(),
        }
    }

    pub fn matches(&self, request: &RequestInfo) -> bool {
        self.matcher.matches(request)
    }

    pub fn policy(&self) -> &CachePolicy {
        &self.policy
    }
}

/// Declaration-ordered rules.
///
/// Evaluation is strictly sequential; the first rule whose matcher
/// returns true is selected and every later rule is skipped, including
/// rules that would also have matched.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The policy of the first matching rule, if any.
    pub fn first_match(&self, request: &RequestInfo) -> Option<&CachePolicy> {
        self.rules
            .iter()
            .find(|rule| rule.matches(request))
            .map(Rule::policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Preset;
    use axum::http::{Method, Uri};

    fn get(path: &'static str) -> RequestInfo {
        RequestInfo::new(Method::GET, Uri::from_static(path))
    }

    #[test]
    fn test_first_match_wins_over_later_broader_rules() {
        let rules = RuleSet::new(vec![
            Rule::new(RouteMatcher::pattern("/api/public/*"), Preset::Static),
            Rule::new(RouteMatcher::pattern("/api/*"), Preset::PrivateUserData),
        ]);

        assert_eq!(
            rules.first_match(&get("/api/public/data")),
            Some(&CachePolicy::Preset(Preset::Static))
        );
        assert_eq!(
            rules.first_match(&get("/api/private/data")),
            Some(&CachePolicy::Preset(Preset::PrivateUserData))
        );
    }

    #[test]
    fn test_no_match_falls_through() {
        let rules = RuleSet::new(vec![Rule::new(RouteMatcher::pattern("/api/*"), Preset::Api)]);
        assert_eq!(rules.first_match(&get("/assets/app.js")), None);
    }

    #[test]
    fn test_disable_outcome_is_carried() {
        let rules = RuleSet::new(vec![Rule::new(
            RouteMatcher::pattern("/admin"),
            CachePolicy::Disable,
        )]);
        assert_eq!(rules.first_match(&get("/admin/users")), Some(&CachePolicy::Disable));
    }
}
