//! Applies the desired override state to the host view layer.

use std::fs;
use std::path::{Path, PathBuf};

use super::original;
use crate::config;
use crate::host::{
    SettingsStore, TemplateMap, TemplateSearchPaths, ThemeRegistry, get_bool, get_string,
};
use crate::themes;

/// What: Reconcile the template map and search paths with the desired state.
///
/// Inputs:
/// - `settings`: Store used to track the pre-override original.
/// - `map`: Template map owned by the host view renderer.
/// - `paths`: Template search-path list owned by the host view renderer.
/// - `desired_enabled`: Whether the override should be active.
/// - `desired_template`: Template file the override should point at.
/// - `view_dir`: The module's own view directory.
///
/// Output:
/// - No return value; mutates `map` and `paths` in place, last write wins.
///
/// Details:
/// - Enabled with an existing template file: the current map entry is
///   captured as original (once), the entry is pointed at the template,
///   and `view_dir` is ensured on the search path.
/// - Disabled, or the template is missing on disk: the original entry is
///   restored (or removed when none was captured) and `view_dir` is taken
///   off the search path. A missing file means "override unusable", never
///   an error.
/// - Idempotent: repeated calls with the same inputs mutate nothing
///   further. Paths are compared canonicalized, not as strings, since
///   symlinks or relative paths may alias.
pub fn apply(
    settings: &mut dyn SettingsStore,
    map: &mut dyn TemplateMap,
    paths: &mut dyn TemplateSearchPaths,
    desired_enabled: bool,
    desired_template: Option<&Path>,
    view_dir: &Path,
) {
    let usable = desired_template.filter(|t| t.is_file());
    if desired_enabled && let Some(template) = usable {
        original::capture_if_absent(settings, map);
        set_template_entry(map, template);
        ensure_search_path(paths, view_dir);
        return;
    }
    if desired_enabled {
        tracing::warn!(
            template = ?desired_template,
            "selected landing template is unusable; falling back to the original"
        );
    }
    original::restore(settings, map);
    remove_search_path(paths, view_dir);
}

/// What: Reconcile from persisted settings, resolving the selected theme.
///
/// Inputs:
/// - `settings`, `map`, `paths`, `view_dir`: As for [`apply`].
/// - `registry`: Host theme registry, when available.
/// - `themes_root`: Directory scanned when the registry yields nothing.
///
/// Output:
/// - No return value.
///
/// Details:
/// - This is the bootstrap/post-save entry point: it reads the enabled
///   flag and selected theme, re-checks that the theme still supplies the
///   landing template (themes can change between discovery and use), and
///   delegates to [`apply`].
pub fn apply_from_settings(
    settings: &mut dyn SettingsStore,
    map: &mut dyn TemplateMap,
    paths: &mut dyn TemplateSearchPaths,
    registry: Option<&dyn ThemeRegistry>,
    themes_root: &Path,
    view_dir: &Path,
) {
    let enabled = get_bool(settings, config::OVERRIDE_ENABLED, false);
    let selected = get_string(settings, config::THEME, "");
    let template = if selected.is_empty() {
        None
    } else {
        themes::list_candidates(registry, themes_root)
            .into_iter()
            .find(|c| c.id == selected)
            .map(|c| c.template_path)
    };
    if enabled && let Some(t) = template.as_deref() {
        tracing::info!(theme = %selected, template = %t.display(), "applying landing template override");
    }
    apply(settings, map, paths, enabled, template.as_deref(), view_dir);
}

/// Point the logical entry at `template`, skipping aliased rewrites.
fn set_template_entry(map: &mut dyn TemplateMap, template: &Path) {
    let mut entries = map.get_map();
    if let Some(existing) = entries.get(config::LOGICAL_TEMPLATE)
        && same_path(Path::new(existing), template)
    {
        return;
    }
    entries.insert(
        config::LOGICAL_TEMPLATE.to_string(),
        template.to_string_lossy().into_owned(),
    );
    map.set_map(entries);
}

/// Append `dir` to the search paths unless an aliasing entry is present.
fn ensure_search_path(paths: &mut dyn TemplateSearchPaths, dir: &Path) {
    if paths.get_paths().iter().any(|p| same_path(p, dir)) {
        return;
    }
    paths.add_path(dir);
}

/// Drop every entry aliasing `dir` from the search paths.
fn remove_search_path(paths: &mut dyn TemplateSearchPaths, dir: &Path) {
    let current = paths.get_paths();
    let kept: Vec<PathBuf> = current
        .iter()
        .filter(|p| !same_path(p, dir))
        .cloned()
        .collect();
    if kept.len() != current.len() {
        paths.set_paths(kept);
    }
}

/// Best-effort aliasing check; falls back to the raw paths when
/// canonicalization fails (for example a map entry whose file is gone).
fn same_path(a: &Path, b: &Path) -> bool {
    canonical(a) == canonical(b)
}

fn canonical(p: &Path) -> PathBuf {
    fs::canonicalize(p).unwrap_or_else(|_| p.to_path_buf())
}
