//! Probing serialized assets for a usable logo.

use serde_json::Value;

use crate::util;

/// Source-URL keys probed on a serialized asset, in priority order.
const URL_KEYS: &[&str] = &["url", "original_url"];
/// Thumbnail sizes probed when no direct URL is present, in priority order.
const THUMBNAIL_KEYS: &[&str] = &["large", "medium", "square", "original"];
/// Title keys probed for a display label, in priority order.
const TITLE_KEYS: &[&str] = &["display_title", "title", "name"];

/// A resolved logo image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Logo {
    /// Image source URL.
    pub src: String,
    /// Alternative text.
    pub alt: String,
}

/// What: Extract a logo from a serialized asset.
///
/// Inputs:
/// - `asset`: Duck-typed serialized asset.
/// - `fallback_alt`: Alt text used when the asset carries neither alt
///   text nor a title.
///
/// Output:
/// - `Some(Logo)` when a source URL could be found; `None` otherwise.
///
/// Details:
/// - The URL probe prefers direct URL keys, then falls through the
///   thumbnail map sizes.
/// - Alt text falls back through the asset title to `fallback_alt`.
#[must_use]
pub fn extract_logo(asset: &Value, fallback_alt: &str) -> Option<Logo> {
    let src = util::ss(asset, URL_KEYS).or_else(|| {
        asset
            .get("thumbnails")
            .and_then(|thumbs| util::ss(thumbs, THUMBNAIL_KEYS))
    })?;
    let alt = util::ss(asset, &["alt_text"])
        .or_else(|| util::ss(asset, TITLE_KEYS))
        .unwrap_or_else(|| fallback_alt.to_string());
    Some(Logo { src, alt })
}

/// Title-case a bundled logo filename into a label: `logo-main.svg`
/// becomes `Logo Main`.
#[must_use]
pub fn label_from_filename(filename: &str) -> String {
    let stem = filename
        .rsplit('/')
        .next()
        .unwrap_or(filename)
        .split('.')
        .next()
        .unwrap_or(filename);
    let mut label = String::with_capacity(stem.len());
    for word in stem.split(['-', '_']).filter(|w| !w.is_empty()) {
        if !label.is_empty() {
            label.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            label.extend(first.to_uppercase());
            label.push_str(chars.as_str());
        }
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn url_probe_prefers_direct_over_thumbnails() {
        let asset = json!({
            "url": "https://cdn/a.png",
            "thumbnails": {"large": "https://cdn/a-large.png"},
        });
        assert_eq!(
            extract_logo(&asset, "fallback").map(|l| l.src),
            Some("https://cdn/a.png".to_string())
        );

        let asset = json!({
            "thumbnails": {"medium": "https://cdn/a-med.png"},
        });
        assert_eq!(
            extract_logo(&asset, "fallback").map(|l| l.src),
            Some("https://cdn/a-med.png".to_string())
        );
    }

    #[test]
    fn alt_falls_back_through_title_to_caller() {
        let with_alt = json!({"url": "u", "alt_text": "Alt", "title": "T"});
        assert_eq!(extract_logo(&with_alt, "f").map(|l| l.alt), Some("Alt".into()));

        let with_title = json!({"url": "u", "title": "T"});
        assert_eq!(extract_logo(&with_title, "f").map(|l| l.alt), Some("T".into()));

        let bare = json!({"url": "u"});
        assert_eq!(extract_logo(&bare, "f").map(|l| l.alt), Some("f".into()));
    }

    #[test]
    fn missing_url_yields_none() {
        assert_eq!(extract_logo(&json!({"alt_text": "x"}), "f"), None);
        assert_eq!(extract_logo(&json!(null), "f"), None);
    }

    #[test]
    fn filename_labels_are_title_cased() {
        assert_eq!(label_from_filename("logo-main.svg"), "Logo Main");
        assert_eq!(label_from_filename("img/partner_logo.png"), "Partner Logo");
        assert_eq!(label_from_filename("plain"), "Plain");
    }
}
