//! Column label sanitization.
//!
//! Turns an arbitrary header label into an identifier that starts with a
//! lowercase letter or underscore and contains only letters, digits, and
//! single underscores.

use std::collections::BTreeMap;

use tracing::warn;

/// Prefix added when a sanitized label would start with a digit.
const DIGIT_PREFIX: &str = "col_";

/// Sanitize a raw column label into an identifier.
///
/// Steps, in order:
/// 1. drop one leading `#` (so `#Change` becomes `change`, not `_change`)
/// 2. lowercase
/// 3. map every character that is not a letter or digit to `_`; whitespace
///    and symbols alike
/// 4. collapse runs of `_` into one
/// 5. prefix `col_` when the result starts with anything but a letter or `_`
/// 6. strip trailing `_`
///
/// Never fails. A label made only of symbols sanitizes to the empty string.
///
/// # Examples
///
/// ```
/// use tabnorm_transform::sanitize;
///
/// assert_eq!(sanitize("#Change Order"), "change_order");
/// assert_eq!(sanitize("2023 Revenue!!"), "col_2023_revenue");
/// assert_eq!(sanitize("%%"), "");
/// ```
pub fn sanitize(label: &str) -> String {
    let label = label.strip_prefix('#').unwrap_or(label);
    let lowered = label.to_lowercase();

    let mut safe = String::with_capacity(lowered.len() + DIGIT_PREFIX.len());
    let mut last_was_underscore = false;
    for ch in lowered.chars() {
        if ch.is_alphanumeric() {
            safe.push(ch);
            last_was_underscore = false;
        } else if !last_was_underscore {
            safe.push('_');
            last_was_underscore = true;
        }
    }

    if safe
        .chars()
        .next()
        .is_some_and(|first| !(first.is_alphabetic() || first == '_'))
    {
        safe.insert_str(0, DIGIT_PREFIX);
    }

    let kept = safe.trim_end_matches('_').len();
    safe.truncate(kept);
    safe
}

/// Sanitize every label of a header, in order.
///
/// Collisions are kept as-is; each sanitized name shared by more than one
/// source label is reported once with `warn!`.
pub fn sanitize_header<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    let sanitized: Vec<String> = labels.iter().map(|label| sanitize(label.as_ref())).collect();

    let mut sources: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (label, name) in labels.iter().zip(&sanitized) {
        sources.entry(name.as_str()).or_default().push(label.as_ref());
    }
    for (name, originals) in sources {
        if originals.len() > 1 {
            warn!(
                sanitized = %name,
                originals = ?originals,
                "multiple columns sanitize to the same identifier"
            );
        }
    }

    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_hash() {
        assert_eq!(sanitize("#Change"), "change");
        assert_eq!(sanitize("##Change"), "_change");
    }

    #[test]
    fn digits_get_prefix() {
        assert_eq!(sanitize("1st Place"), "col_1st_place");
        assert_eq!(sanitize("42"), "col_42");
    }

    #[test]
    fn underscore_start_is_kept() {
        assert_eq!(sanitize("_id"), "_id");
        assert_eq!(sanitize("(id)"), "_id");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   "), "");
        assert_eq!(sanitize("#"), "");
    }

    #[test]
    fn header_keeps_collisions() {
        let header = sanitize_header(&["First Name", "first-name", "Age"]);
        assert_eq!(header, vec!["first_name", "first_name", "age"]);
    }
}
