//! Setting keys, defaults, and typed access to persisted landing-page state.
//!
//! All state lives in the host's key-value settings store under the
//! `landing_` prefix. This module is the single place that knows the key
//! names, their default values, and the serialized shape of structured
//! values such as the navigation page list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::host::SettingsStore;

/// Whether the home-page template override is active.
pub const OVERRIDE_ENABLED: &str = "landing_override_enabled";
/// Identifier of the theme supplying the override template.
pub const THEME: &str = "landing_theme";
/// Template-map entry recorded before the first override activation.
pub const ORIGINAL_TEMPLATE: &str = "landing_original_template";
/// Ordered site ids shown in the featured section.
pub const FEATURED_SITES: &str = "landing_featured_sites";
/// Slug of the site providing the header navigation pages.
pub const BASE_SITE: &str = "landing_base_site";
/// Ordered slug/label pairs rendered in the header navigation.
pub const NAV_PAGES: &str = "landing_nav_pages";
/// Raw HTML rendered inside the global footer.
pub const FOOTER_HTML: &str = "landing_footer_html";
/// Primary brand color (hex).
pub const PRIMARY_COLOR: &str = "landing_primary_color";
/// Secondary brand color (hex).
pub const SECONDARY_COLOR: &str = "landing_secondary_color";
/// Accent color (hex).
pub const ACCENT_COLOR: &str = "landing_accent_color";
/// Ordered header logo references (asset ids or filenames), at most three.
pub const LOGOS: &str = "landing_logos";
/// Whether the top bar is rendered.
pub const SHOW_TOP_BAR: &str = "landing_show_top_bar";
/// Top bar logo: asset id, literal URL, or empty.
pub const TOP_BAR_LOGO: &str = "landing_top_bar_logo";

/// Every key the module owns, in the order they are seeded on install.
pub const ALL_KEYS: &[&str] = &[
    OVERRIDE_ENABLED,
    THEME,
    ORIGINAL_TEMPLATE,
    FEATURED_SITES,
    BASE_SITE,
    NAV_PAGES,
    FOOTER_HTML,
    PRIMARY_COLOR,
    SECONDARY_COLOR,
    ACCENT_COLOR,
    LOGOS,
    SHOW_TOP_BAR,
    TOP_BAR_LOGO,
];

/// Logical template name consulted by the host view renderer for the home page.
pub const LOGICAL_TEMPLATE: &str = "home-index";
/// Relative path, under a theme's base directory, of the landing template.
pub const THEME_TEMPLATE_RELPATH: &str = "view/home/index.html";
/// Relative path, under a theme's base directory, of its metadata file.
pub const THEME_META_RELPATH: &str = "config/theme.ini";

/// Default primary color seeded on install.
pub const DEFAULT_PRIMARY_COLOR: &str = "#004488";
/// Default secondary color seeded on install.
pub const DEFAULT_SECONDARY_COLOR: &str = "#f4f4f4";
/// Default accent color seeded on install.
pub const DEFAULT_ACCENT_COLOR: &str = "#ffb300";
/// Maximum number of header logos kept from a submission.
pub const MAX_LOGOS: usize = 3;
/// Bundled fallback logo files used when no uploaded logo resolves.
pub const DEFAULT_LOGOS: &[&str] = &["logo-main.svg", "logo-partner.svg"];

/// Route-table name of the default home route.
pub const HOME_ROUTE: &str = "home";
/// Handler the home route points at while the override is enabled.
pub const LANDING_HANDLER: &str = "landing/index";
/// Handler the home route points at otherwise.
pub const DEFAULT_HOME_HANDLER: &str = "site/index";

/// One entry of the header navigation, in menu order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavPage {
    /// URL-safe page identifier within the base site.
    pub slug: String,
    /// Display label; falls back to the slug when the page title was empty.
    pub label: String,
}

/// Read the stored navigation pages, tolerating missing or malformed values.
///
/// The list is persisted as an ordered JSON array of `{slug, label}`
/// objects; anything else deserializes to an empty list.
#[must_use]
pub fn read_nav_pages(settings: &dyn SettingsStore) -> Vec<NavPage> {
    settings
        .get(NAV_PAGES)
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

/// Persist the navigation pages in insertion order.
pub fn save_nav_pages(settings: &mut dyn SettingsStore, pages: &[NavPage]) {
    let value = serde_json::to_value(pages).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to serialize navigation pages");
        Value::Array(Vec::new())
    });
    settings.set(NAV_PAGES, value);
}

/// Read a stored string list (logos, featured ids serialized as strings).
#[must_use]
pub fn read_string_list(settings: &dyn SettingsStore, key: &str) -> Vec<String> {
    settings
        .get(key)
        .as_ref()
        .map(|v| crate::normalize::string_list(v))
        .unwrap_or_default()
}

/// Read the stored featured site ids.
#[must_use]
pub fn read_featured_sites(settings: &dyn SettingsStore) -> Vec<u64> {
    settings
        .get(FEATURED_SITES)
        .as_ref()
        .map(|v| crate::normalize::positive_int_list(v))
        .unwrap_or_default()
}

/// Read a stored color, substituting `default` for missing or invalid values.
#[must_use]
pub fn read_color(settings: &dyn SettingsStore, key: &str, default: &str) -> String {
    settings
        .get(key)
        .as_ref()
        .map_or_else(|| default.to_string(), |v| crate::normalize::hex_color(v, default))
}

/// Read the stored top-bar logo reference in its raw form.
#[must_use]
pub fn read_top_bar_logo(settings: &dyn SettingsStore) -> Value {
    settings.get(TOP_BAR_LOGO).unwrap_or(Value::Null)
}
