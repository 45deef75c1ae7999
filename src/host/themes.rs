//! Theme registry with duck-typed theme handles.
//!
//! Host platforms expose theme objects with differing accessor sets, so a
//! handle is probed by accessor name instead of through a fixed interface.
//! A probe must never panic: unsupported or failing accessors simply
//! return `None` and the caller tries the next name in its priority list.

use serde_json::Value;

use crate::util;

/// One installed theme, probed by accessor name.
pub trait ThemeHandle {
    /// Invoke a named accessor, `None` when unsupported, failing, or empty.
    fn probe(&self, accessor: &str) -> Option<String>;

    /// Read a key from the theme's parsed ini metadata, when the host
    /// exposes it. Defaults to `None`.
    fn ini_value(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Enumeration of installed themes.
pub trait ThemeRegistry {
    /// All registered themes, in registry order.
    fn list_themes(&self) -> Vec<Box<dyn ThemeHandle>>;
}

/// [`ThemeHandle`] backed by a serialized theme object.
///
/// Accessor probes read same-named string fields; ini values are read from
/// a nested `ini` object. Suitable both for hosts that hand over
/// serialized theme data and for tests.
#[derive(Clone, Debug)]
pub struct JsonTheme {
    data: Value,
}

impl JsonTheme {
    /// Wrap a serialized theme object.
    #[must_use]
    pub const fn new(data: Value) -> Self {
        Self { data }
    }
}

impl ThemeHandle for JsonTheme {
    fn probe(&self, accessor: &str) -> Option<String> {
        util::ss(&self.data, &[accessor])
    }

    fn ini_value(&self, key: &str) -> Option<String> {
        self.data.get("ini").and_then(|ini| util::ss(ini, &[key]))
    }
}

/// [`ThemeRegistry`] over a fixed list of serialized themes.
#[derive(Clone, Debug, Default)]
pub struct StaticThemeRegistry {
    themes: Vec<Value>,
}

impl StaticThemeRegistry {
    /// Build a registry from serialized theme objects.
    #[must_use]
    pub const fn new(themes: Vec<Value>) -> Self {
        Self { themes }
    }
}

impl ThemeRegistry for StaticThemeRegistry {
    fn list_themes(&self) -> Vec<Box<dyn ThemeHandle>> {
        self.themes
            .iter()
            .map(|t| Box::new(JsonTheme::new(t.clone())) as Box<dyn ThemeHandle>)
            .collect()
    }
}
