//! Semantic validation of directive combinations.

use super::directives::DirectiveSet;
use super::error::PolicyError;

/// Reject conflicting or out-of-range directive combinations.
///
/// Runs before serialization on every set that reaches the wire, no matter
/// where the set came from (preset, rule, route config, or override).
/// Non-integer durations are not an error here; they are rounded at
/// serialization time.
pub fn validate(set: &DirectiveSet) -> Result<(), PolicyError> {
    if set.public && set.private.is_enabled() {
        return Err(PolicyError::ConflictingVisibility);
    }

    for (directive, value) in [
        ("max-age", set.max_age),
        ("s-maxage", set.s_maxage),
        ("stale-while-revalidate", set.stale_while_revalidate),
        ("stale-if-error", set.stale_if_error),
    ] {
        if let Some(value) = value {
            if value < 0.0 {
                return Err(PolicyError::NegativeDuration { directive, value });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::directives::Scope;

    #[test]
    fn test_public_with_private_conflicts() {
        let set = DirectiveSet::new().with_public().with_private(true);
        assert!(matches!(validate(&set), Err(PolicyError::ConflictingVisibility)));
    }

    #[test]
    fn test_public_with_private_field_list_conflicts() {
        let set = DirectiveSet::new().with_public().with_private(vec!["cookie"]);
        assert!(matches!(validate(&set), Err(PolicyError::ConflictingVisibility)));
    }

    #[test]
    fn test_public_with_empty_private_list_is_fine() {
        // An empty field list counts as "flag absent", not as private.
        let set = DirectiveSet::new().with_public().with_private(Scope::Fields(vec![]));
        assert!(validate(&set).is_ok());
    }

    #[test]
    fn test_negative_duration_names_the_directive() {
        let set = DirectiveSet::new().with_max_age(-1.0);
        match validate(&set) {
            Err(PolicyError::NegativeDuration { directive, value }) => {
                assert_eq!(directive, "max-age");
                assert_eq!(value, -1.0);
            }
            other => panic!("expected NegativeDuration, got {other:?}"),
        }

        let set = DirectiveSet::new().with_stale_if_error(-0.5);
        match validate(&set) {
            Err(PolicyError::NegativeDuration { directive, .. }) => {
                assert_eq!(directive, "stale-if-error");
            }
            other => panic!("expected NegativeDuration, got {other:?}"),
        }
    }

    #[test]
    fn test_fractional_durations_are_accepted() {
        let set = DirectiveSet::new().with_max_age(3600.7);
        assert!(validate(&set).is_ok());
    }

    #[test]
    fn test_every_preset_validates() {
        use crate::policy::presets::Preset;
        for preset in [
            Preset::Static,
            Preset::Api,
            Preset::Realtime,
            Preset::Page,
            Preset::PrivateUserData,
        ] {
            assert!(validate(&preset.directives()).is_ok(), "{preset:?}");
        }
    }
}
