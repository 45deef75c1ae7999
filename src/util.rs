//! Small helpers for probing loosely-typed JSON values.
//!
//! Host platforms hand this crate serialized objects (form submissions,
//! asset records, theme descriptors) whose exact shape varies between host
//! versions. The functions here implement the prioritized key probes used
//! throughout the crate and are intentionally lightweight.

use serde_json::Value;

/// What: Extract the first available non-empty string from a list of candidate keys.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `keys`: Candidate keys to try in order.
///
/// Output:
/// - `Some(String)` for the first key that maps to a non-empty JSON string; `None` otherwise.
///
/// Details:
/// - Empty strings are skipped so a later, populated key can still win the probe.
#[must_use]
pub fn ss(v: &Value, keys: &[&str]) -> Option<String> {
    for k in keys {
        if let Some(s) = v.get(*k).and_then(Value::as_str)
            && !s.trim().is_empty()
        {
            return Some(s.to_owned());
        }
    }
    None
}

/// What: Coerce a scalar JSON value into a positive integer.
///
/// Inputs:
/// - `v`: JSON value that may be a number or a numeric string.
///
/// Output:
/// - `Some(u64)` when the value is a whole number greater than zero; `None` otherwise.
///
/// Details:
/// - Accepts JSON `u64`, non-negative `i64`, and strings that parse as `u64`.
/// - Zero and negative values are rejected; floats are not coerced.
#[must_use]
pub fn positive_u64(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                return (u > 0).then_some(u);
            }
            if let Some(i) = n.as_i64()
                && let Ok(u) = u64::try_from(i)
            {
                return (u > 0).then_some(u);
            }
            None
        }
        Value::String(raw) => raw.trim().parse::<u64>().ok().filter(|u| *u > 0),
        _ => None,
    }
}

/// What: Probe multiple keys of an object for a positive integer, first match wins.
///
/// Inputs:
/// - `v`: JSON object to probe.
/// - `keys`: Candidate keys tried in order.
///
/// Output:
/// - `Some(u64)` for the first key holding a positive integer; `None` when no key matches.
#[must_use]
pub fn u64_of(v: &Value, keys: &[&str]) -> Option<u64> {
    for k in keys {
        if let Some(n) = v.get(*k)
            && let Some(u) = positive_u64(n)
        {
            return Some(u);
        }
    }
    None
}

/// Reduce a possibly-list value to its meaningful scalar.
///
/// HTML selects submit lists when marked multiple; the host platform reads
/// the first element in that case. Empty lists collapse to `Null`.
#[must_use]
pub fn first_scalar(v: &Value) -> &Value {
    match v {
        Value::Array(items) => items.first().unwrap_or(&Value::Null),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn probes_prefer_first_non_empty_string() {
        let v = json!({"a": "", "b": "hit", "c": "later"});
        assert_eq!(ss(&v, &["a", "b", "c"]), Some("hit".to_string()));
        assert_eq!(ss(&v, &["a"]), None);
        assert_eq!(ss(&v, &["missing"]), None);
    }

    #[test]
    fn positive_u64_accepts_numbers_and_numeric_strings() {
        assert_eq!(positive_u64(&json!(7)), Some(7));
        assert_eq!(positive_u64(&json!("7")), Some(7));
        assert_eq!(positive_u64(&json!(0)), None);
        assert_eq!(positive_u64(&json!(-3)), None);
        assert_eq!(positive_u64(&json!("x")), None);
        assert_eq!(positive_u64(&json!(null)), None);
    }

    #[test]
    fn u64_of_walks_keys_in_order() {
        let v = json!({"id": 0, "asset_id": 42});
        assert_eq!(u64_of(&v, &["id", "asset_id"]), Some(42));
        assert_eq!(u64_of(&v, &["id"]), None);
    }

    #[test]
    fn first_scalar_unwraps_lists() {
        let list = json!(["a", "b"]);
        assert_eq!(first_scalar(&list), &json!("a"));
        let scalar = json!("a");
        assert_eq!(first_scalar(&scalar), &scalar);
        assert_eq!(first_scalar(&json!([])), &Value::Null);
    }
}
