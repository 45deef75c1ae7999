//! Enumerates themes that supply the landing template.

use std::fs;
use std::path::{Path, PathBuf};

use super::meta;
use crate::config;
use crate::host::{ThemeHandle, ThemeRegistry};

/// Identifier accessors probed on a theme handle, in priority order.
const ID_ACCESSORS: &[&str] = &["id", "name", "slug"];
/// Base-path accessors probed on a theme handle, in priority order.
const PATH_ACCESSORS: &[&str] = &["path", "root_path", "base_path"];
/// Label accessors probed on a theme handle, in priority order.
const LABEL_ACCESSORS: &[&str] = &["label", "title", "display_name", "name"];

/// A theme qualified to supply the landing template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeCandidate {
    /// Stable identifier used as the stored setting value.
    pub id: String,
    /// Human-readable label for the selection control.
    pub label: String,
    /// Absolute path of the theme's landing template file.
    pub template_path: PathBuf,
}

/// What: List qualifying themes, sorted case-insensitively by label.
///
/// Inputs:
/// - `registry`: Host theme registry, when available.
/// - `themes_root`: Themes directory used for path fallbacks and for the
///   directory scan.
///
/// Output:
/// - Qualifying candidates; a theme qualifies only when
///   `view/home/index.html` exists under its base path at discovery time.
///
/// Details:
/// - The registry is the primary source; the directory scan runs only
///   when the registry is absent or yields zero candidates.
/// - Malformed or partially-implemented theme objects are skipped, never
///   propagated: a failing accessor probe just falls through to the next.
/// - Registry duplicates by id keep the last occurrence, matching the
///   host's own keyed-collection behavior.
#[must_use]
pub fn list_candidates(
    registry: Option<&dyn ThemeRegistry>,
    themes_root: &Path,
) -> Vec<ThemeCandidate> {
    let mut found = registry.map_or_else(Vec::new, |r| from_registry(r, themes_root));
    if found.is_empty() {
        found = from_directory(themes_root);
    }
    found.sort_by(|a, b| {
        a.label
            .to_lowercase()
            .cmp(&b.label.to_lowercase())
            .then_with(|| a.id.cmp(&b.id))
    });
    found
}

/// First accessor returning a non-empty string wins.
fn probe_first(theme: &dyn ThemeHandle, accessors: &[&str]) -> Option<String> {
    accessors
        .iter()
        .find_map(|accessor| theme.probe(accessor).filter(|v| !v.trim().is_empty()))
}

fn from_registry(registry: &dyn ThemeRegistry, themes_root: &Path) -> Vec<ThemeCandidate> {
    let mut candidates: Vec<ThemeCandidate> = Vec::new();
    for theme in registry.list_themes() {
        let Some(id) = probe_first(theme.as_ref(), ID_ACCESSORS) else {
            continue;
        };
        let base = probe_first(theme.as_ref(), PATH_ACCESSORS)
            .map_or_else(|| themes_root.join(&id), PathBuf::from);
        let template_path = base.join(config::THEME_TEMPLATE_RELPATH);
        if !template_path.is_file() {
            tracing::debug!(theme = %id, "theme lacks the landing template; skipped");
            continue;
        }
        let label = probe_first(theme.as_ref(), LABEL_ACCESSORS)
            .or_else(|| theme.ini_value("label"))
            .unwrap_or_else(|| id.clone());
        let candidate = ThemeCandidate {
            id,
            label,
            template_path,
        };
        match candidates.iter_mut().find(|c| c.id == candidate.id) {
            Some(existing) => *existing = candidate,
            None => candidates.push(candidate),
        }
    }
    candidates
}

fn from_directory(themes_root: &Path) -> Vec<ThemeCandidate> {
    let Ok(entries) = fs::read_dir(themes_root) else {
        return Vec::new();
    };
    let mut candidates: Vec<ThemeCandidate> = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let id = entry.file_name().to_string_lossy().into_owned();
        let template_path = path.join(config::THEME_TEMPLATE_RELPATH);
        if !template_path.is_file() {
            continue;
        }
        let label = meta::label_from_dir(&path, &id);
        candidates.push(ThemeCandidate {
            id,
            label,
            template_path,
        });
    }
    candidates
}
