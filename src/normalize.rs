//! Canonicalization of raw admin-form values.
//!
//! Form submissions arrive loosely typed: checkboxes as strings or lists,
//! identifiers as numbers or slugs, colors as arbitrary text. The pure
//! functions here convert them into validated canonical values and never
//! error; unusable input degrades to `false`, empty, the caller's default,
//! or `None`.

use serde_json::Value;

use crate::host::SiteLookup;
use crate::util;

/// Id-like keys probed on structured asset references, at the top level
/// and one nesting level down (`asset.id`).
const ASSET_ID_KEYS: &[&str] = &["id", "asset_id"];

/// What: Interpret a submitted checkbox value as a boolean.
///
/// Inputs:
/// - `value`: Raw submitted value.
///
/// Output:
/// - `true` iff the value is boolean `true`, numeric `1`, or a trimmed
///   case-insensitive `"1"`, `"true"`, or `"yes"`.
///
/// Details:
/// - Lists are reduced to their last element first: when a hidden
///   companion field is present the browser submits `["0", "1"]` for a
///   checked box.
/// - Every other input, including floats and `null`, is `false`.
#[must_use]
pub fn checkbox(value: &Value) -> bool {
    let scalar = match value {
        Value::Array(items) => match items.last() {
            Some(last) => last,
            None => return false,
        },
        other => other,
    };
    match scalar {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_u64() == Some(1) || n.as_i64() == Some(1),
        Value::String(s) => {
            matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
        }
        _ => false,
    }
}

/// What: Normalize a submitted multi-select into distinct positive integers.
///
/// Inputs:
/// - `value`: Raw submitted value.
///
/// Output:
/// - Distinct positive integers in first-seen order; empty for non-list input.
///
/// Details:
/// - Elements may be numbers or numeric strings; non-positive and
///   non-numeric elements are dropped.
#[must_use]
pub fn positive_int_list(value: &Value) -> Vec<u64> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    let mut out: Vec<u64> = Vec::with_capacity(items.len());
    for item in items {
        if let Some(id) = util::positive_u64(item)
            && !out.contains(&id)
        {
            out.push(id);
        }
    }
    out
}

/// What: Normalize a submitted multi-select into distinct non-empty strings.
///
/// Inputs:
/// - `value`: Raw submitted value.
///
/// Output:
/// - Distinct trimmed non-empty strings in first-seen order; empty for
///   non-list input.
///
/// Details:
/// - Numeric elements are kept in their decimal string form, since id
///   lists and filename lists travel through the same fields.
#[must_use]
pub fn string_list(value: &Value) -> Vec<String> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let text = match item {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => continue,
        };
        if !text.is_empty() && !out.contains(&text) {
            out.push(text);
        }
    }
    out
}

/// True when `value` is a `#`-prefixed 3- or 6-digit hex color.
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|digits| {
        (digits.len() == 3 || digits.len() == 6)
            && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}

/// What: Normalize a submitted color to lowercase hex.
///
/// Inputs:
/// - `value`: Raw submitted value.
/// - `default`: Returned verbatim for non-matching or non-string input.
///
/// Output:
/// - The lowercased hex color, or `default`.
#[must_use]
pub fn hex_color(value: &Value, default: &str) -> String {
    if let Value::String(s) = value {
        let trimmed = s.trim();
        if is_hex_color(trimmed) {
            return trimmed.to_ascii_lowercase();
        }
    }
    default.to_string()
}

/// What: Resolve a submitted site identifier (numeric id or slug) to an id.
///
/// Inputs:
/// - `value`: Raw submitted value.
/// - `sites`: Lookup collaborator used for slug resolution.
///
/// Output:
/// - `Some(id)` for a positive numeric input or a slug known to the host;
///   `None` otherwise.
///
/// Details:
/// - Numeric input (including numeric strings) is coerced directly without
///   a lookup.
/// - Lookup failures are swallowed and reported as `None`; a deleted site
///   must not abort the surrounding settings save.
#[must_use]
pub fn site_identifier(value: &Value, sites: &dyn SiteLookup) -> Option<u64> {
    if let Some(id) = util::positive_u64(value) {
        return Some(id);
    }
    let Value::String(raw) = value else {
        return None;
    };
    let slug = raw.trim();
    if slug.is_empty() {
        return None;
    }
    sites
        .find_id_by_slug(slug)
        .map_err(|e| tracing::debug!(slug, error = %e, "site lookup failed during normalization"))
        .ok()
        .flatten()
        .filter(|id| *id > 0)
}

/// What: Extract a positive asset id from a bare id or a structured reference.
///
/// Inputs:
/// - `value`: Raw value — a number, numeric string, or object.
///
/// Output:
/// - The first positive id found; `None` when nothing matches.
///
/// Details:
/// - Objects are probed for id-like keys at the top level, then one
///   nesting level down under `asset`.
#[must_use]
pub fn asset_identifier(value: &Value) -> Option<u64> {
    if let Some(id) = util::positive_u64(value) {
        return Some(id);
    }
    if let Value::Object(_) = value {
        if let Some(id) = util::u64_of(value, ASSET_ID_KEYS) {
            return Some(id);
        }
        if let Some(nested) = value.get("asset") {
            return util::u64_of(nested, ASSET_ID_KEYS);
        }
    }
    None
}
