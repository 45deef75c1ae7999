//! Ini-style theme metadata parsing (`config/theme.ini`).

use std::fs;
use std::path::Path;

use crate::config;

/// Metadata keys consulted for a display label, in priority order.
const LABEL_KEYS: &[&str] = &["label", "title", "name"];

/// Derive a display label for a theme directory, falling back to its id.
///
/// Reads `config/theme.ini` under `theme_dir` when present; a missing or
/// unreadable file, or one without a label-like key, yields the id.
pub fn label_from_dir(theme_dir: &Path, theme_id: &str) -> String {
    let ini_path = theme_dir.join(config::THEME_META_RELPATH);
    if let Ok(content) = fs::read_to_string(&ini_path) {
        for key in LABEL_KEYS {
            if let Some(value) = ini_lookup(&content, key) {
                return value;
            }
        }
    }
    theme_id.to_string()
}

/// What: Find the first non-empty value for `wanted` in ini-style content.
///
/// Inputs:
/// - `content`: Raw file content with `key = value` lines.
/// - `wanted`: Key to look for (matched case-insensitively).
///
/// Output:
/// - `Some(value)` with surrounding quotes stripped; `None` when absent.
///
/// Details:
/// - Blank lines, `#`/`;` comments, and `[section]` headers are skipped.
/// - Keys are normalized to lowercase with `.`/`-`/space folded to `_`,
///   matching how the rest of the crate treats config keys.
pub fn ini_lookup(content: &str, wanted: &str) -> Option<String> {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed.starts_with('#')
            || trimmed.starts_with(';')
            || trimmed.starts_with('[')
        {
            continue;
        }
        let mut parts = trimmed.splitn(2, '=');
        let raw_key = parts.next().unwrap_or("");
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        if key != wanted {
            continue;
        }
        let val = parts.next().unwrap_or("").trim();
        let val = val
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(val);
        if !val.is_empty() {
            return Some(val.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ini_lookup_skips_comments_and_sections() {
        let content = "; theme metadata\n[info]\n# label = wrong\nauthor = someone\nLabel = \"Clean Slate\"\n";
        assert_eq!(ini_lookup(content, "label"), Some("Clean Slate".to_string()));
        assert_eq!(ini_lookup(content, "author"), Some("someone".to_string()));
        assert_eq!(ini_lookup(content, "title"), None);
    }

    #[test]
    fn ini_lookup_ignores_empty_values() {
        assert_eq!(ini_lookup("label =\nlabel = Real", "label"), Some("Real".to_string()));
    }

    #[test]
    fn label_from_dir_falls_back_to_id() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(label_from_dir(dir.path(), "plain"), "plain");

        let meta_dir = dir.path().join("config");
        std::fs::create_dir_all(&meta_dir).expect("fixture dir");
        std::fs::write(meta_dir.join("theme.ini"), "title = Plain Theme\n")
            .expect("fixture file");
        assert_eq!(label_from_dir(dir.path(), "plain"), "Plain Theme");
    }
}
