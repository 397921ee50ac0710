//! Control-character handling.

/// C0 controls (U+0000..=U+001F) and DEL.
fn is_stripped_control(ch: char) -> bool {
    ch <= '\u{1f}' || ch == '\u{7f}'
}

/// Remove every C0 control character and DEL. Nothing else is touched.
pub fn strip_control_chars(value: &str) -> String {
    if !value.chars().any(is_stripped_control) {
        return value.to_string();
    }
    value.chars().filter(|ch| !is_stripped_control(*ch)).collect()
}

/// True for the empty string and strings made only of whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
