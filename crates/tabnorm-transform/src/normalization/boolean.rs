//! Boolean token detection and conversion.

const TRUE_TOKENS: &[&str] = &["true", "yes", "t", "y", "1"];
const FALSE_TOKENS: &[&str] = &["false", "no", "f", "n", "0"];

fn matches_any(value: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|token| value.eq_ignore_ascii_case(token))
}

/// True when the value is one of the recognised boolean tokens (any case).
pub fn classify_boolean(value: &str) -> bool {
    matches_any(value, TRUE_TOKENS) || matches_any(value, FALSE_TOKENS)
}

/// Map a boolean token to `"true"` or `"false"`; anything else is unchanged.
pub fn convert_boolean(value: &str) -> String {
    if matches_any(value, TRUE_TOKENS) {
        "true".to_string()
    } else if matches_any(value, FALSE_TOKENS) {
        "false".to_string()
    } else {
        value.to_string()
    }
}
