//! Key-value settings store supplied by the host platform.

use std::collections::BTreeMap;

use serde_json::Value;

/// Persistent key-value store for module settings.
///
/// The host platform owns persistence; this crate only reads and writes
/// loosely-typed values. One admin submission is processed start-to-finish
/// before the next, so mutation takes `&mut self` and no locking is needed.
pub trait SettingsStore {
    /// Read a value, `None` when the key was never set or was deleted.
    fn get(&self, key: &str) -> Option<Value>;
    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: Value);
    /// Remove a key entirely.
    fn delete(&mut self, key: &str);
}

/// What: Read a boolean setting with a default for absent keys.
///
/// Inputs:
/// - `settings`: Store to read from.
/// - `key`: Setting name.
/// - `default`: Value returned when the key is absent.
///
/// Output:
/// - The stored boolean, or `default` when missing.
///
/// Details:
/// - Non-boolean stored values (legacy `"1"`/`"0"` strings, numbers) are
///   interpreted with the same truthiness rules as form checkboxes.
#[must_use]
pub fn get_bool(settings: &dyn SettingsStore, key: &str, default: bool) -> bool {
    match settings.get(key) {
        Some(Value::Bool(b)) => b,
        Some(other) => crate::normalize::checkbox(&other),
        None => default,
    }
}

/// Read a string setting, returning `default` for absent or non-string values.
#[must_use]
pub fn get_string(settings: &dyn SettingsStore, key: &str, default: &str) -> String {
    match settings.get(key) {
        Some(Value::String(s)) => s,
        _ => default.to_string(),
    }
}

/// In-memory [`SettingsStore`] used in tests and single-process embeddings.
#[derive(Clone, Debug, Default)]
pub struct MemorySettings {
    values: BTreeMap<String, Value>,
}

impl MemorySettings {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys currently present, in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) {
        self.values.remove(key);
    }
}
