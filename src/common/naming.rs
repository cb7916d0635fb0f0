//! Identifier spelling conversions

/// Convert a camelCase identifier to kebab-case.
///
/// A hyphen is inserted at every lowercase-to-uppercase boundary and the
/// whole result is lowercased, so `runnerConfig` becomes `runner-config`
/// while `ABC` (no such boundary) simply becomes `abc`.
pub fn camel_to_kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;

    for c in s.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            out.push('-');
        }
        prev_lower = c.is_ascii_lowercase();
        out.extend(c.to_lowercase());
    }

    out
}
