//! Rendering of raw user input as SQL literals

use std::sync::OnceLock;

/// Returns `true` if `raw` reads as a decimal floating-point number.
///
/// Accepts an optional sign, digits with an optional fractional part (or a
/// bare fractional part like `.5`), and an optional exponent. Leading and
/// trailing whitespace is tolerated. Thousands separators, `inf` and `NaN`
/// are not numbers here.
pub fn is_numeric(raw: &str) -> bool {
    static NUMBER_RE: OnceLock<regex::Regex> = OnceLock::new();
    NUMBER_RE
        .get_or_init(|| {
            regex::Regex::new(r"^\s*[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?\s*$")
                .expect("invalid built-in number regex")
        })
        .is_match(raw)
}

/// Render a raw value for inclusion in SQL text.
///
/// Numbers pass through untouched, anything else is wrapped in single
/// quotes. Embedded quotes are NOT escaped: the output is only as safe as
/// the input.
///
/// # Examples
/// ```
/// use sqlgen_core::format_value;
///
/// assert_eq!(format_value("42"), "42");
/// assert_eq!(format_value("abc"), "'abc'");
/// assert_eq!(format_value(""), "''");
/// ```
pub fn format_value(raw: &str) -> String {
    if is_numeric(raw) {
        raw.to_string()
    } else {
        format!("'{}'", raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_pass_through() {
        assert_eq!(format_value("42"), "42");
        assert_eq!(format_value("-7"), "-7");
        assert_eq!(format_value("+3"), "+3");
    }

    #[test]
    fn test_decimals_pass_through() {
        assert_eq!(format_value("3.14"), "3.14");
        assert_eq!(format_value(".5"), ".5");
        assert_eq!(format_value("5."), "5.");
    }

    #[test]
    fn test_exponents_pass_through() {
        assert_eq!(format_value("1e10"), "1e10");
        assert_eq!(format_value("2.5E-3"), "2.5E-3");
    }

    #[test]
    fn test_text_is_quoted() {
        assert_eq!(format_value("abc"), "'abc'");
        assert_eq!(format_value("12abc"), "'12abc'");
        assert_eq!(format_value("1,000"), "'1,000'");
    }

    #[test]
    fn test_empty_is_quoted() {
        assert_eq!(format_value(""), "''");
        assert_eq!(format_value("   "), "'   '");
    }

    #[test]
    fn test_surrounding_whitespace_is_kept_verbatim() {
        assert!(is_numeric(" 42 "));
        assert_eq!(format_value(" 42 "), " 42 ");
    }

    #[test]
    fn test_non_finite_words_are_text() {
        assert!(!is_numeric("NaN"));
        assert!(!is_numeric("inf"));
        assert_eq!(format_value("Infinity"), "'Infinity'");
    }

    #[test]
    fn test_embedded_quotes_are_not_escaped() {
        assert_eq!(format_value("O'Brien"), "'O'Brien'");
    }

    #[test]
    fn test_lone_sign_or_dot_is_text() {
        assert!(!is_numeric("-"));
        assert!(!is_numeric("."));
        assert!(!is_numeric("1e"));
    }
}
