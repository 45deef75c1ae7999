//! Install and uninstall hooks establishing and removing default settings.

use std::path::Path;

use serde_json::{Value, json};

use crate::config;
use crate::engine;
use crate::host::{SettingsStore, TemplateMap, TemplateSearchPaths};

/// What: Seed default settings on module install.
///
/// Inputs:
/// - `settings`: Store to seed.
///
/// Output:
/// - No return value.
///
/// Details:
/// - The override starts disabled with no theme selected; a stale
///   recorded original from a previous install is cleared so the first
///   activation captures fresh state.
pub fn install(settings: &mut dyn SettingsStore) {
    settings.set(config::OVERRIDE_ENABLED, Value::Bool(false));
    settings.set(config::THEME, json!(""));
    settings.delete(config::ORIGINAL_TEMPLATE);
    settings.set(config::FEATURED_SITES, json!([]));
    settings.set(config::BASE_SITE, json!(""));
    settings.set(config::NAV_PAGES, json!([]));
    settings.set(config::FOOTER_HTML, json!(""));
    settings.set(config::PRIMARY_COLOR, json!(config::DEFAULT_PRIMARY_COLOR));
    settings.set(
        config::SECONDARY_COLOR,
        json!(config::DEFAULT_SECONDARY_COLOR),
    );
    settings.set(config::ACCENT_COLOR, json!(config::DEFAULT_ACCENT_COLOR));
    settings.set(config::LOGOS, json!([]));
    settings.set(config::SHOW_TOP_BAR, Value::Bool(true));
    settings.set(config::TOP_BAR_LOGO, json!(""));
    tracing::info!("seeded landing page default settings");
}

/// What: Remove the override and every module setting on uninstall.
///
/// Inputs:
/// - `settings`: Store to clear.
/// - `map`, `paths`: View-layer collaborators to restore.
/// - `view_dir`: The module's own view directory.
///
/// Output:
/// - No return value.
///
/// Details:
/// - The template map is restored to the recorded original (or cleared)
///   before the settings, including the recorded original itself, are
///   deleted.
pub fn uninstall(
    settings: &mut dyn SettingsStore,
    map: &mut dyn TemplateMap,
    paths: &mut dyn TemplateSearchPaths,
    view_dir: &Path,
) {
    engine::apply(settings, map, paths, false, None, view_dir);
    for key in config::ALL_KEYS {
        settings.delete(key);
    }
    tracing::info!("removed landing page settings and template override");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{
        MemorySearchPaths, MemorySettings, MemoryTemplateMap, get_bool, get_string,
    };

    #[test]
    fn install_seeds_disabled_defaults() {
        let mut settings = MemorySettings::new();
        install(&mut settings);
        assert!(!get_bool(&settings, config::OVERRIDE_ENABLED, true));
        assert_eq!(get_string(&settings, config::THEME, "x"), "");
        assert_eq!(
            get_string(&settings, config::PRIMARY_COLOR, ""),
            config::DEFAULT_PRIMARY_COLOR
        );
        assert!(get_bool(&settings, config::SHOW_TOP_BAR, false));
        assert_eq!(settings.get(config::ORIGINAL_TEMPLATE), None);
    }

    #[test]
    fn uninstall_clears_every_module_key() {
        let mut settings = MemorySettings::new();
        install(&mut settings);
        let mut map = MemoryTemplateMap::new();
        let mut paths = MemorySearchPaths::new();
        uninstall(
            &mut settings,
            &mut map,
            &mut paths,
            Path::new("/modules/landing/view"),
        );
        assert!(settings.keys().is_empty());
    }
}
