//! Vary derivation from field-scoped privacy directives.

use super::directives::DirectiveSet;

/// Collect the header names referenced by the `private` and `no-cache`
/// field lists, deduplicated in first-occurrence order and normalized to
/// canonical header capitalization.
///
/// Boolean-valued scoped flags contribute nothing; only explicit field
/// lists do.
pub fn derive_vary_fields(set: &DirectiveSet) -> Vec<String> {
    let mut raw: Vec<&String> = Vec::new();
    for fields in [set.private.fields(), set.no_cache.fields()].into_iter().flatten() {
        for field in fields {
            if !raw.contains(&field) {
                raw.push(field);
            }
        }
    }
    raw.iter().map(|name| normalize_header_name(name)).collect()
}

/// Merge derived names into the entries an existing `Vary` header already
/// carries. Existing entries come first; duplicates are dropped by exact
/// string comparison.
pub fn merge_vary(existing: Vec<String>, derived: Vec<String>) -> Vec<String> {
    let mut merged = existing;
    for name in derived {
        if !merged.contains(&name) {
            merged.push(name);
        }
    }
    merged
}

/// Normalize one field name to standard header capitalization.
///
/// The two well-known names map to their canonical spellings; everything
/// else is title-cased per `-`-delimited segment.
fn normalize_header_name(name: &str) -> String {
    match name.to_ascii_lowercase().as_str() {
        "cookie" => "Cookie".to_string(),
        "authorization" | "auth" => "Authorization".to_string(),
        _ => name
            .split('-')
            .map(title_case)
            .collect::<Vec<_>>()
            .join("-"),
    }
}

fn title_case(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}
