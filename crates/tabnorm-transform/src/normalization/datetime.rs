//! Date detection and conversion.
//!
//! Detection is shape-based and only anchored at the start of the value, so
//! `01/02/2023 10:00` still counts as a date candidate. Conversion is
//! parse-based: the first template that consumes the whole value wins.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Month/day/year or day/month/year, `/` or `-` separated.
static NUMERIC_DMY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,2}[/-]\d{1,2}[/-]\d{2,4}").expect("Invalid numeric date regex")
});

/// Year first, `/` or `-` separated.
static NUMERIC_YMD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}[/-]\d{1,2}[/-]\d{1,2}").expect("Invalid year-first date regex")
});

/// Day, month name (abbreviated or full), year: `15-Jan-2023`.
static MONTH_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\d{1,2}-(jan(uary)?|feb(ruary)?|mar(ch)?|apr(il)?|may|june?|july?|aug(ust)?|sep(tember)?|oct(ober)?|nov(ember)?|dec(ember)?)-\d{2,4}",
    )
    .expect("Invalid month name date regex")
});

/// A concrete parse template.
struct DateTemplate {
    format: &'static str,
    separator: char,
    /// Index of the year field after splitting on `separator`.
    year_field: usize,
}

/// Tried in order; month/day/year wins over day/month/year for ambiguous input.
const DATE_TEMPLATES: &[DateTemplate] = &[
    DateTemplate { format: "%m/%d/%Y", separator: '/', year_field: 2 },
    DateTemplate { format: "%m-%d-%Y", separator: '-', year_field: 2 },
    DateTemplate { format: "%d/%m/%Y", separator: '/', year_field: 2 },
    DateTemplate { format: "%d-%m-%Y", separator: '-', year_field: 2 },
    DateTemplate { format: "%Y/%m/%d", separator: '/', year_field: 0 },
    DateTemplate { format: "%Y-%m-%d", separator: '-', year_field: 0 },
    DateTemplate { format: "%d-%b-%Y", separator: '-', year_field: 2 },
    DateTemplate { format: "%d-%B-%Y", separator: '-', year_field: 2 },
];

/// True when the value starts with one of the recognised date shapes.
pub fn classify_date(value: &str) -> bool {
    NUMERIC_DMY_REGEX.is_match(value)
        || NUMERIC_YMD_REGEX.is_match(value)
        || MONTH_NAME_REGEX.is_match(value)
}

/// Reformat a date value as `YYYY-MM-DD`.
///
/// Returns the input unchanged when no template parses the whole value.
///
/// # Examples
///
/// ```
/// use tabnorm_transform::convert_date;
///
/// assert_eq!(convert_date("01/15/2023"), "2023-01-15");
/// assert_eq!(convert_date("15-Jan-2023"), "2023-01-15");
/// assert_eq!(convert_date("not-a-date"), "not-a-date");
/// ```
pub fn convert_date(value: &str) -> String {
    parse_date(value)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Parse a value with the first matching template.
///
/// chrono lets whitespace in the input match nothing, so any whitespace
/// would parse as a padded field. Such values are not dates.
fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.chars().any(char::is_whitespace) {
        return None;
    }
    DATE_TEMPLATES.iter().find_map(|template| {
        if !has_four_digit_year(value, template) {
            return None;
        }
        NaiveDate::parse_from_str(value, template.format).ok()
    })
}

/// `%Y` in chrono accepts any digit count; templates want a full year.
fn has_four_digit_year(value: &str, template: &DateTemplate) -> bool {
    value
        .split(template.separator)
        .nth(template.year_field)
        .is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_are_start_anchored() {
        assert!(classify_date("1/2/23"));
        assert!(classify_date("2023-01-15"));
        assert!(classify_date("15-jan-2023"));
        assert!(classify_date("15-September-2023"));
        assert!(classify_date("01/02/2023 trailing"));
        assert!(!classify_date(" 01/02/2023"));
        assert!(!classify_date("15-Foo-2023"));
        assert!(!classify_date("2023"));
    }

    #[test]
    fn month_day_year_wins() {
        assert_eq!(convert_date("01/02/2023"), "2023-01-02");
        assert_eq!(convert_date("1-2-2023"), "2023-01-02");
    }

    #[test]
    fn falls_back_to_day_month_year() {
        assert_eq!(convert_date("25/12/2023"), "2023-12-25");
        assert_eq!(convert_date("25-12-2023"), "2023-12-25");
    }

    #[test]
    fn year_first_templates() {
        assert_eq!(convert_date("2023/1/5"), "2023-01-05");
        assert_eq!(convert_date("2023-12-25"), "2023-12-25");
    }

    #[test]
    fn month_names() {
        assert_eq!(convert_date("5-Mar-2024"), "2024-03-05");
        assert_eq!(convert_date("05-March-2024"), "2024-03-05");
    }

    #[test]
    fn partial_parses_pass_through() {
        assert_eq!(convert_date("01/02/23"), "01/02/23");
        assert_eq!(convert_date("01/02/2023 10:00"), "01/02/2023 10:00");
        assert_eq!(convert_date("13/13/2023"), "13/13/2023");
    }

    #[test]
    fn embedded_whitespace_is_not_a_date() {
        assert_eq!(convert_date(" 1/02/2023"), " 1/02/2023");
        assert_eq!(convert_date("01/ 2/2023"), "01/ 2/2023");
        assert_eq!(convert_date("5- Mar-2024"), "5- Mar-2024");
        assert_eq!(convert_date("2023-01-02 "), "2023-01-02 ");
    }
}
