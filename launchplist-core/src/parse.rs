//! Lenient scalar parsing for calendar-interval fields.
//!
//! Job files come from YAML, JSON, or hand-built `serde_json::Value`s, so a
//! minute may arrive as `5`, `5.0`, or `"5"`. These helpers accept all of
//! those and return `None` for anything that is not a whole number.

use serde_json::Value;

const WEEKDAYS: [(&str, &str); 7] = [
    ("sunday", "sun"),
    ("monday", "mon"),
    ("tuesday", "tue"),
    ("wednesday", "wed"),
    ("thursday", "thu"),
    ("friday", "fri"),
    ("saturday", "sat"),
];

/// Parse a whole number from a JSON number or a numeric string.
///
/// Fractional, non-finite, and out-of-range values yield `None`.
pub fn parse_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole))
        }
        _ => None,
    }
}

/// Parse a weekday as launchd numbers it: `0` is Sunday through `6` Saturday.
///
/// Accepts a number (`7` is folded onto Sunday, as launchd does), a numeric
/// string, or an English day name / three-letter abbreviation in any case.
pub fn parse_weekday(value: &Value) -> Option<i64> {
    if let Some(n) = parse_number(value) {
        return match n {
            0..=6 => Some(n),
            7 => Some(0),
            _ => None,
        };
    }

    let name = value.as_str()?.trim().to_ascii_lowercase();
    WEEKDAYS
        .iter()
        .position(|(full, short)| name == *full || name == *short)
        .map(|i| i as i64)
}

/// `true` for a JSON object with no keys. Any non-object is not "empty".
pub fn is_empty_object(value: &Value) -> bool {
    value.as_object().is_some_and(|m| m.is_empty())
}

fn whole(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_accepts_ints_whole_floats_and_numeric_strings() {
        assert_eq!(parse_number(&json!(5)), Some(5));
        assert_eq!(parse_number(&json!(5.0)), Some(5));
        assert_eq!(parse_number(&json!(" 42 ")), Some(42));
        assert_eq!(parse_number(&json!("-3")), Some(-3));
    }

    #[test]
    fn number_rejects_everything_else() {
        assert_eq!(parse_number(&json!(1.5)), None);
        assert_eq!(parse_number(&json!("abc")), None);
        assert_eq!(parse_number(&json!("")), None);
        assert_eq!(parse_number(&json!(true)), None);
        assert_eq!(parse_number(&json!(null)), None);
        assert_eq!(parse_number(&json!([1])), None);
        assert_eq!(parse_number(&json!("inf")), None);
    }

    #[test]
    fn weekday_names_any_case() {
        assert_eq!(parse_weekday(&json!("Sunday")), Some(0));
        assert_eq!(parse_weekday(&json!("friday")), Some(5));
        assert_eq!(parse_weekday(&json!("SAT")), Some(6));
        assert_eq!(parse_weekday(&json!("Wed")), Some(3));
    }

    #[test]
    fn weekday_numbers_in_range() {
        assert_eq!(parse_weekday(&json!(1)), Some(1));
        assert_eq!(parse_weekday(&json!("4")), Some(4));
        assert_eq!(parse_weekday(&json!(7)), Some(0));
        assert_eq!(parse_weekday(&json!(8)), None);
        assert_eq!(parse_weekday(&json!(-1)), None);
    }

    #[test]
    fn weekday_rejects_unknown_names() {
        assert_eq!(parse_weekday(&json!("Funday")), None);
        assert_eq!(parse_weekday(&json!("")), None);
        assert_eq!(parse_weekday(&json!(false)), None);
    }

    #[test]
    fn empty_object_detection() {
        assert!(is_empty_object(&json!({})));
        assert!(!is_empty_object(&json!({"Minute": 1})));
        assert!(!is_empty_object(&json!([])));
        assert!(!is_empty_object(&json!(null)));
    }
}
