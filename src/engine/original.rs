//! Tracks the template-map entry that existed before the first override
//! activation, so disabling (or uninstalling) restores prior behavior.

use serde_json::Value;

use crate::config;
use crate::host::{SettingsStore, TemplateMap, get_string};

/// What: Record the current `home-index` entry as the original, once.
///
/// Inputs:
/// - `settings`: Store holding the recorded original, if any.
/// - `map`: Template map to read the current entry from.
///
/// Output:
/// - No return value; persists the original path when absent.
///
/// Details:
/// - A no-op while an original is already recorded, which prevents the
///   override's own path from ever being captured across repeated toggles
///   within one activation episode.
/// - A missing or empty current entry records nothing; `restore` then
///   removes the key instead of writing an empty string.
pub fn capture_if_absent(settings: &mut dyn SettingsStore, map: &dyn TemplateMap) {
    let recorded = get_string(settings, config::ORIGINAL_TEMPLATE, "");
    if !recorded.is_empty() {
        return;
    }
    if let Some(current) = map.get_map().get(config::LOGICAL_TEMPLATE)
        && !current.is_empty()
    {
        tracing::debug!(original = %current, "recorded pre-override home template");
        settings.set(config::ORIGINAL_TEMPLATE, Value::String(current.clone()));
    }
}

/// What: Restore the recorded original entry, or remove the override entry.
///
/// Inputs:
/// - `settings`: Store holding the recorded original, if any.
/// - `map`: Template map to mutate.
///
/// Output:
/// - No return value; mutates the map only when it differs from the target
///   state.
///
/// Details:
/// - With a recorded non-empty original, the `home-index` entry is written
///   back to it.
/// - Without one the key is removed entirely so resolution falls back to
///   the host's search paths.
pub fn restore(settings: &dyn SettingsStore, map: &mut dyn TemplateMap) {
    let original = get_string(settings, config::ORIGINAL_TEMPLATE, "");
    let mut entries = map.get_map();
    if original.is_empty() {
        if entries.remove(config::LOGICAL_TEMPLATE).is_some() {
            tracing::debug!("removed home template override entry");
            map.set_map(entries);
        }
        return;
    }
    if entries.get(config::LOGICAL_TEMPLATE) != Some(&original) {
        tracing::debug!(original = %original, "restored pre-override home template");
        entries.insert(config::LOGICAL_TEMPLATE.to_string(), original);
        map.set_map(entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MemorySettings, MemoryTemplateMap};
    use serde_json::json;

    #[test]
    fn capture_records_only_once() {
        let mut settings = MemorySettings::new();
        let mut map =
            MemoryTemplateMap::with_entries(&[(config::LOGICAL_TEMPLATE, "/orig.html")]);
        capture_if_absent(&mut settings, &map);
        assert_eq!(settings.get(config::ORIGINAL_TEMPLATE), Some(json!("/orig.html")));

        // The map now points at the override; a second capture must not
        // overwrite the recorded original.
        let mut entries = map.get_map();
        entries.insert(config::LOGICAL_TEMPLATE.to_string(), "/override.html".into());
        map.set_map(entries);
        capture_if_absent(&mut settings, &map);
        assert_eq!(settings.get(config::ORIGINAL_TEMPLATE), Some(json!("/orig.html")));
    }

    #[test]
    fn capture_skips_absent_entry() {
        let mut settings = MemorySettings::new();
        let map = MemoryTemplateMap::new();
        capture_if_absent(&mut settings, &map);
        assert_eq!(settings.get(config::ORIGINAL_TEMPLATE), None);
    }

    #[test]
    fn restore_without_original_removes_the_key() {
        let settings = MemorySettings::new();
        let mut map =
            MemoryTemplateMap::with_entries(&[(config::LOGICAL_TEMPLATE, "/override.html")]);
        restore(&settings, &mut map);
        assert!(!map.get_map().contains_key(config::LOGICAL_TEMPLATE));
    }

    #[test]
    fn restore_with_empty_recorded_original_removes_the_key() {
        let mut settings = MemorySettings::new();
        settings.set(config::ORIGINAL_TEMPLATE, json!(""));
        let mut map =
            MemoryTemplateMap::with_entries(&[(config::LOGICAL_TEMPLATE, "/override.html")]);
        restore(&settings, &mut map);
        assert!(!map.get_map().contains_key(config::LOGICAL_TEMPLATE));
    }

    #[test]
    fn restore_writes_recorded_original_back() {
        let mut settings = MemorySettings::new();
        settings.set(config::ORIGINAL_TEMPLATE, json!("/orig.html"));
        let mut map =
            MemoryTemplateMap::with_entries(&[(config::LOGICAL_TEMPLATE, "/override.html")]);
        restore(&settings, &mut map);
        assert_eq!(
            map.get_map().get(config::LOGICAL_TEMPLATE),
            Some(&"/orig.html".to_string())
        );
    }
}
