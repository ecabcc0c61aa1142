//! Canonical serialization of a directive set to a header value.

use super::directives::{DirectiveSet, Scope};

/// Serialize a validated set into its canonical `Cache-Control` value.
///
/// Token order is fixed regardless of how the set was built. An entirely
/// absent set yields the empty string; the caller is responsible for
/// suppressing the header in that case.
pub fn serialize(set: &DirectiveSet) -> String {
    let mut tokens: Vec<String> = Vec::new();

    if set.public {
        tokens.push("public".to_string());
    }
    push_scoped(&mut tokens, "private", &set.private);
    push_scoped(&mut tokens, "no-cache", &set.no_cache);
    if set.no_store {
        tokens.push("no-store".to_string());
    }
    if set.no_transform {
        tokens.push("no-transform".to_string());
    }
    if set.must_revalidate {
        tokens.push("must-revalidate".to_string());
    }
    if set.proxy_revalidate {
        tokens.push("proxy-revalidate".to_string());
    }
    if set.must_understand {
        tokens.push("must-understand".to_string());
    }
    if set.immutable {
        tokens.push("immutable".to_string());
    }
    push_duration(&mut tokens, "max-age", set.max_age);
    push_duration(&mut tokens, "s-maxage", set.s_maxage);
    push_duration(&mut tokens, "stale-while-revalidate", set.stale_while_revalidate);
    push_duration(&mut tokens, "stale-if-error", set.stale_if_error);

    tokens.join(", ")
}

fn push_scoped(tokens: &mut Vec<String>, name: &str, scope: &Scope) {
    match scope {
        Scope::Flag(true) => tokens.push(name.to_string()),
        Scope::Fields(fields) if !fields.is_empty() => {
            tokens.push(format!("{}=\"{}\"", name, fields.join(", ")));
        }
        _ => {}
    }
}

fn push_duration(tokens: &mut Vec<String>, name: &str, value: Option<f64>) {
    if let Some(secs) = value {
        // Rounding happens here and nowhere earlier; f64::round is
        // half-away-from-zero.
        tokens.push(format!("{}={}", name, secs.round() as i64));
    }
}
