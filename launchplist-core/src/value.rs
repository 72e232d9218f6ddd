//! Coercion of loosely typed input into property-list values.
//!
//! Every setter on [`crate::LaunchPlist`] funnels its input through one of the
//! `coerce_*` functions here. Each either returns the value in its stored
//! shape or a [`ValidationError`] naming the key, so the record is never
//! touched by a rejected value.

use plist::{Dictionary, Value as PlistValue};
use serde_json::{Number, Value};

use crate::error::ValidationError;

/// Convert an arbitrary JSON value into a plist value.
///
/// Property lists have no null, so a `null` anywhere in the tree is rejected.
pub fn to_plist(key: &str, value: &Value) -> Result<PlistValue, ValidationError> {
    match value {
        Value::Null => Err(ValidationError::new(key, "cannot contain a null value")),
        Value::Bool(b) => Ok(PlistValue::Boolean(*b)),
        Value::Number(n) => Ok(number_to_plist(n)),
        Value::String(s) => Ok(PlistValue::String(s.clone())),
        Value::Array(items) => items
            .iter()
            .map(|item| to_plist(key, item))
            .collect::<Result<Vec<_>, _>>()
            .map(PlistValue::Array),
        Value::Object(map) => {
            let mut dict = Dictionary::new();
            for (k, v) in map {
                dict.insert(k.clone(), to_plist(key, v)?);
            }
            Ok(PlistValue::Dictionary(dict))
        }
    }
}

fn number_to_plist(n: &Number) -> PlistValue {
    if let Some(i) = n.as_i64() {
        PlistValue::Integer(i.into())
    } else if let Some(u) = n.as_u64() {
        PlistValue::Integer(u.into())
    } else {
        PlistValue::Real(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// Booleans only; no truthiness.
pub fn coerce_boolean(key: &str, value: &Value) -> Result<bool, ValidationError> {
    value
        .as_bool()
        .ok_or_else(|| ValidationError::new(key, "must be a boolean"))
}

/// Strings, or numbers rendered as strings. When `allowed` is non-empty the
/// result must be one of its members exactly.
pub fn coerce_string(key: &str, value: &Value, allowed: &[&str]) -> Result<String, ValidationError> {
    let s = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return Err(ValidationError::new(key, "must be a string")),
    };
    if !allowed.is_empty() && !allowed.contains(&s.as_str()) {
        return Err(ValidationError::new(
            key,
            format!("must be one of {}", allowed.join(", ")),
        ));
    }
    Ok(s)
}

/// Numbers, or strings that parse as finite numbers. Whole values are stored
/// as plist integers, everything else as reals.
pub fn coerce_number(key: &str, value: &Value) -> Result<PlistValue, ValidationError> {
    let invalid = || ValidationError::new(key, "must be a valid number");
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if !f.is_finite() => Err(invalid()),
            _ => Ok(whole_or_real(n)),
        },
        Value::String(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                return Ok(PlistValue::Integer(i.into()));
            }
            match s.parse::<f64>() {
                Ok(f) if f.is_finite() => Ok(real_to_plist(f)),
                _ => Err(invalid()),
            }
        }
        _ => Err(invalid()),
    }
}

fn whole_or_real(n: &Number) -> PlistValue {
    match number_to_plist(n) {
        PlistValue::Real(f) => real_to_plist(f),
        other => other,
    }
}

fn real_to_plist(f: f64) -> PlistValue {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        PlistValue::Integer((f as i64).into())
    } else {
        PlistValue::Real(f)
    }
}

/// Normalize any input into an array.
///
/// Arrays pass through; empty input (`null`, `""`, `false`, `0`) becomes an
/// empty array; anything else is wrapped as a single element. The shape
/// never fails, only a nested `null` does.
pub fn normalize_array(key: &str, value: &Value) -> Result<Vec<PlistValue>, ValidationError> {
    match value {
        Value::Array(items) => items.iter().map(|item| to_plist(key, item)).collect(),
        v if is_blank(v) => Ok(Vec::new()),
        v => Ok(vec![to_plist(key, v)?]),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

/// Maps only. Arrays are rejected explicitly: object and array fields are
/// distinct in launchd.
pub fn coerce_object(key: &str, value: &Value) -> Result<Dictionary, ValidationError> {
    match value {
        Value::Object(_) => match to_plist(key, value)? {
            PlistValue::Dictionary(dict) => Ok(dict),
            _ => Err(ValidationError::new(key, "must be an object")),
        },
        _ => Err(ValidationError::new(key, "must be an object")),
    }
}

// ---------------------------------------------------------------------------
// KeepAlive
// ---------------------------------------------------------------------------

/// The permissive `KeepAlive` value.
///
/// launchd reads either a boolean or a dictionary of conditions here; the
/// builder also lets strings and numbers through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum KeepAlive {
    Bool(bool),
    String(String),
    Integer(i64),
    Number(f64),
    Options(Dictionary),
}

impl KeepAlive {
    pub fn into_plist(self) -> PlistValue {
        match self {
            KeepAlive::Bool(b) => PlistValue::Boolean(b),
            KeepAlive::String(s) => PlistValue::String(s),
            KeepAlive::Integer(n) => PlistValue::Integer(n.into()),
            KeepAlive::Number(f) => real_to_plist(f),
            KeepAlive::Options(dict) => PlistValue::Dictionary(dict),
        }
    }
}

impl From<bool> for KeepAlive {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for KeepAlive {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for KeepAlive {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for KeepAlive {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for KeepAlive {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<Dictionary> for KeepAlive {
    fn from(dict: Dictionary) -> Self {
        Self::Options(dict)
    }
}

impl TryFrom<&Value> for KeepAlive {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::String(s) => Ok(Self::String(s.clone())),
            Value::Number(n) => Ok(match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            }),
            Value::Object(_) => coerce_object(crate::keys::KEEP_ALIVE, value).map(Self::Options),
            _ => Err(ValidationError::new(
                crate::keys::KEEP_ALIVE,
                "must be a boolean, string, number, or dictionary",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_coerces_numbers() {
        assert_eq!(coerce_string("Label", &json!(42), &[]).unwrap(), "42");
        assert!(coerce_string("Label", &json!(true), &[]).is_err());
    }

    #[test]
    fn string_enum_is_exact_membership() {
        let allowed = ["Aqua", "System"];
        assert!(coerce_string("S", &json!("Aqua"), &allowed).is_ok());
        let err = coerce_string("S", &json!("aqua"), &allowed).unwrap_err();
        assert_eq!(err.to_string(), "S must be one of Aqua, System");
        assert!(coerce_string("S", &json!("Aq"), &allowed).is_err());
    }

    #[test]
    fn number_keeps_integers_integral() {
        assert_eq!(
            coerce_number("Nice", &json!(19)).unwrap(),
            PlistValue::Integer(19_i64.into())
        );
        assert_eq!(
            coerce_number("Nice", &json!("19")).unwrap(),
            PlistValue::Integer(19_i64.into())
        );
        assert_eq!(
            coerce_number("Nice", &json!(" 2.0 ")).unwrap(),
            PlistValue::Integer(2_i64.into())
        );
        assert_eq!(
            coerce_number("TimeOut", &json!(1.5)).unwrap(),
            PlistValue::Real(1.5)
        );
    }

    #[test]
    fn number_rejects_non_numeric() {
        for bad in [json!("abc"), json!(""), json!("NaN"), json!(null), json!(true), json!([1])] {
            let err = coerce_number("Nice", &bad).unwrap_err();
            assert_eq!(err.to_string(), "Nice must be a valid number", "input {bad}");
        }
    }

    #[test]
    fn array_normalization() {
        assert_eq!(normalize_array("A", &json!("x")).unwrap(), vec![PlistValue::String("x".into())]);
        assert!(normalize_array("A", &json!("")).unwrap().is_empty());
        assert!(normalize_array("A", &json!(null)).unwrap().is_empty());
        assert!(normalize_array("A", &json!(false)).unwrap().is_empty());
        assert!(normalize_array("A", &json!(0)).unwrap().is_empty());
        assert_eq!(normalize_array("A", &json!(7)).unwrap(), vec![PlistValue::Integer(7_i64.into())]);
        assert_eq!(normalize_array("A", &json!([1, "b"])).unwrap().len(), 2);
    }

    #[test]
    fn nested_null_is_unrepresentable() {
        let err = normalize_array("WatchPaths", &json!(["/tmp", null])).unwrap_err();
        assert_eq!(err.field, "WatchPaths");
    }

    #[test]
    fn object_rejects_arrays_and_scalars() {
        assert!(coerce_object("E", &json!([])).is_err());
        assert!(coerce_object("E", &json!("x")).is_err());
        let dict = coerce_object("E", &json!({"B": "2", "A": 1})).unwrap();
        let keys: Vec<&str> = dict.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["B", "A"]);
    }

    #[test]
    fn keep_alive_from_json() {
        assert_eq!(KeepAlive::try_from(&json!(true)).unwrap(), KeepAlive::Bool(true));
        assert!(matches!(
            KeepAlive::try_from(&json!({"SuccessfulExit": false})).unwrap(),
            KeepAlive::Options(_)
        ));
        assert_eq!(KeepAlive::try_from(&json!(30)).unwrap(), KeepAlive::Integer(30));
        assert_eq!(KeepAlive::try_from(&json!(0.5)).unwrap(), KeepAlive::Number(0.5));
        assert!(KeepAlive::try_from(&json!(null)).is_err());
        assert!(KeepAlive::try_from(&json!([true])).is_err());
    }

    #[test]
    fn keep_alive_integers_keep_full_precision() {
        let big = (1_i64 << 53) + 1;
        assert_eq!(
            KeepAlive::from(big).into_plist(),
            PlistValue::Integer(big.into())
        );
        assert_eq!(
            KeepAlive::try_from(&json!(i64::MAX)).unwrap().into_plist(),
            PlistValue::Integer(i64::MAX.into())
        );
    }
}
