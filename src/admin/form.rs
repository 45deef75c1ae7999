//! Config-form state and submission handling.
//!
//! The host renders the form and posts the raw submission back as a
//! loosely-typed object; this module validates it, persists the
//! normalized settings, and reconciles the view layer. Markup is the
//! host's concern: [`FormState`] carries everything a renderer needs.

use std::path::Path;

use serde_json::{Value, json};

use super::messages::{Message, Messenger};
use crate::config::{self, NavPage};
use crate::engine;
use crate::host::{
    SettingsStore, SiteLookup, TemplateMap, TemplateSearchPaths, ThemeRegistry, get_bool,
    get_string,
};
use crate::normalize;
use crate::themes;
use crate::util;

/// Color fields with their display names and install defaults.
const COLOR_FIELDS: &[(&str, &str, &str)] = &[
    (
        config::PRIMARY_COLOR,
        "Primary color",
        config::DEFAULT_PRIMARY_COLOR,
    ),
    (
        config::SECONDARY_COLOR,
        "Secondary color",
        config::DEFAULT_SECONDARY_COLOR,
    ),
    (
        config::ACCENT_COLOR,
        "Accent color",
        config::DEFAULT_ACCENT_COLOR,
    ),
];

/// Collaborators needed to process a form submission.
pub struct FormDeps<'a> {
    /// Settings store to persist into.
    pub settings: &'a mut dyn SettingsStore,
    /// Template map owned by the host view renderer.
    pub template_map: &'a mut dyn TemplateMap,
    /// Template search paths owned by the host view renderer.
    pub search_paths: &'a mut dyn TemplateSearchPaths,
    /// Site and page lookups.
    pub sites: &'a dyn SiteLookup,
    /// Theme registry, when the host exposes one.
    pub registry: Option<&'a dyn ThemeRegistry>,
    /// Themes directory for the discovery fallback.
    pub themes_root: &'a Path,
    /// The module's own view directory.
    pub view_dir: &'a Path,
}

/// Result of a submission: whether it was saved, plus user-facing messages.
#[derive(Clone, Debug)]
pub struct Outcome {
    /// True when the settings were persisted.
    pub saved: bool,
    /// Messages for the admin, in recording order.
    pub messages: Vec<Message>,
}

/// Everything a host-side renderer needs to draw the config form.
#[derive(Clone, Debug)]
pub struct FormState {
    /// Whether the override is currently enabled.
    pub override_enabled: bool,
    /// Currently selected theme id, empty when none.
    pub theme: String,
    /// `(id, display)` options for the theme selection control.
    pub theme_options: Vec<(String, String)>,
    /// Currently featured site ids, in display order.
    pub featured_sites: Vec<u64>,
    /// Slug of the base site for navigation, empty when unset.
    pub base_site: String,
    /// Configured navigation pages, in menu order.
    pub nav_pages: Vec<NavPage>,
    /// `(slug, title)` options for the navigation multi-select, from the
    /// base site's pages in position order.
    pub nav_page_options: Vec<(String, String)>,
    /// Raw footer HTML.
    pub footer_html: String,
    /// Primary color (hex, lowercase).
    pub primary_color: String,
    /// Secondary color (hex, lowercase).
    pub secondary_color: String,
    /// Accent color (hex, lowercase).
    pub accent_color: String,
    /// Header logo references.
    pub logos: Vec<String>,
    /// Whether the top bar is shown.
    pub show_top_bar: bool,
    /// Raw top-bar logo reference (asset id, URL string, or empty).
    pub top_bar_logo: Value,
}

/// What: Snapshot current settings and discovery results for rendering.
///
/// Inputs:
/// - `settings`: Store to read from.
/// - `sites`: Lookup used for the navigation page options.
/// - `registry`, `themes_root`: Theme discovery sources.
///
/// Output:
/// - A [`FormState`] with every field populated; lookup failures degrade
///   to empty option lists.
#[must_use]
pub fn form_state(
    settings: &dyn SettingsStore,
    sites: &dyn SiteLookup,
    registry: Option<&dyn ThemeRegistry>,
    themes_root: &Path,
) -> FormState {
    let candidates = themes::list_candidates(registry, themes_root);
    let base_site = get_string(settings, config::BASE_SITE, "");
    FormState {
        override_enabled: get_bool(settings, config::OVERRIDE_ENABLED, false),
        theme: get_string(settings, config::THEME, ""),
        theme_options: themes::options(&candidates),
        featured_sites: config::read_featured_sites(settings),
        nav_pages: config::read_nav_pages(settings),
        nav_page_options: page_options(sites, &base_site),
        base_site,
        footer_html: get_string(settings, config::FOOTER_HTML, ""),
        primary_color: config::read_color(
            settings,
            config::PRIMARY_COLOR,
            config::DEFAULT_PRIMARY_COLOR,
        ),
        secondary_color: config::read_color(
            settings,
            config::SECONDARY_COLOR,
            config::DEFAULT_SECONDARY_COLOR,
        ),
        accent_color: config::read_color(
            settings,
            config::ACCENT_COLOR,
            config::DEFAULT_ACCENT_COLOR,
        ),
        logos: config::read_string_list(settings, config::LOGOS),
        show_top_bar: get_bool(settings, config::SHOW_TOP_BAR, true),
        top_bar_logo: config::read_top_bar_logo(settings),
    }
}

/// What: Validate and persist an admin submission, then reconcile.
///
/// Inputs:
/// - `raw`: The posted form data as a loosely-typed object; field names
///   equal the setting keys.
/// - `deps`: Injected collaborators.
///
/// Output:
/// - An [`Outcome`]; `saved` is false when validation rejected the
///   submission, in which case no setting was touched.
///
/// Details:
/// - Validation errors (invalid color, enabling without a qualifying
///   theme) reject the whole save with a specific message.
/// - A previously selected theme that stopped supplying the landing
///   template clears the selection, force-disables the override, and
///   downgrades to a warning; the save proceeds.
/// - Site, page, and asset lookup failures degrade the affected field to
///   empty and never abort the save.
#[must_use]
pub fn handle_submission(raw: &Value, deps: FormDeps) -> Outcome {
    let mut messenger = Messenger::new();
    let field = |name: &str| raw.get(name).unwrap_or(&Value::Null);

    let mut enabled = normalize::checkbox(field(config::OVERRIDE_ENABLED));
    let mut selected = util::first_scalar(field(config::THEME))
        .as_str()
        .unwrap_or("")
        .trim()
        .to_string();

    let candidates = themes::list_candidates(deps.registry, deps.themes_root);
    let known = |id: &str| candidates.iter().any(|c| c.id == id);

    for (key, label, _default) in COLOR_FIELDS {
        if let Value::String(s) = util::first_scalar(field(key)) {
            let trimmed = s.trim();
            if !trimmed.is_empty() && !normalize::is_hex_color(trimmed) {
                messenger.error(format!(
                    "{label}: please provide a valid hex color (e.g. #004488)."
                ));
            }
        }
    }
    if messenger.has_errors() {
        return Outcome {
            saved: false,
            messages: messenger.into_messages(),
        };
    }

    if enabled && (selected.is_empty() || !known(&selected)) {
        messenger.error(format!(
            "Select a theme that supplies {} before enabling the override.",
            config::THEME_TEMPLATE_RELPATH
        ));
        return Outcome {
            saved: false,
            messages: messenger.into_messages(),
        };
    }

    if !selected.is_empty() && !known(&selected) {
        tracing::warn!(theme = %selected, "previously selected theme no longer qualifies");
        messenger.warning(format!(
            "The selected theme no longer supplies {}. Override disabled.",
            config::THEME_TEMPLATE_RELPATH
        ));
        selected.clear();
        enabled = false;
    }

    let featured = normalize::positive_int_list(field(config::FEATURED_SITES));
    let base_slug = resolve_base_slug(field(config::BASE_SITE), deps.sites);
    let nav_pages = resolve_nav_pages(
        field(config::NAV_PAGES),
        &base_slug,
        deps.sites,
    );
    let footer = util::first_scalar(field(config::FOOTER_HTML))
        .as_str()
        .unwrap_or("")
        .trim()
        .to_string();
    let mut logos = normalize::string_list(field(config::LOGOS));
    logos.truncate(config::MAX_LOGOS);

    deps.settings.set(config::OVERRIDE_ENABLED, Value::Bool(enabled));
    deps.settings.set(config::THEME, json!(selected));
    deps.settings.set(config::FEATURED_SITES, json!(featured));
    deps.settings.set(config::BASE_SITE, json!(base_slug));
    config::save_nav_pages(deps.settings, &nav_pages);
    deps.settings.set(config::FOOTER_HTML, json!(footer));
    for (key, _label, default) in COLOR_FIELDS {
        let color = normalize::hex_color(util::first_scalar(field(key)), default);
        deps.settings.set(key, json!(color));
    }
    deps.settings.set(config::LOGOS, json!(logos));
    deps.settings.set(
        config::SHOW_TOP_BAR,
        Value::Bool(normalize::checkbox(field(config::SHOW_TOP_BAR))),
    );
    deps.settings.set(
        config::TOP_BAR_LOGO,
        top_bar_logo_value(field(config::TOP_BAR_LOGO)),
    );

    let template = candidates
        .iter()
        .find(|c| c.id == selected)
        .map(|c| c.template_path.clone());
    engine::apply(
        deps.settings,
        deps.template_map,
        deps.search_paths,
        enabled,
        template.as_deref(),
        deps.view_dir,
    );

    tracing::info!(enabled, theme = %selected, "landing page configuration saved");
    messenger.success("Global landing page configuration saved.");
    Outcome {
        saved: true,
        messages: messenger.into_messages(),
    }
}

/// Canonicalize the submitted base site (numeric id or slug) to slug form.
fn resolve_base_slug(value: &Value, sites: &dyn SiteLookup) -> String {
    let scalar = util::first_scalar(value);
    let Some(id) = normalize::site_identifier(scalar, sites) else {
        return String::new();
    };
    match sites.find_slug_by_id(id) {
        Ok(Some(slug)) => slug,
        Ok(None) => String::new(),
        Err(e) => {
            tracing::debug!(id, error = %e, "slug lookup failed; clearing base site");
            String::new()
        }
    }
}

/// Pair the submitted page slugs with titles from the base site, keeping
/// submission order and dropping slugs that are not pages of that site.
fn resolve_nav_pages(value: &Value, base_slug: &str, sites: &dyn SiteLookup) -> Vec<NavPage> {
    let submitted = normalize::string_list(value);
    if submitted.is_empty() || base_slug.is_empty() {
        return Vec::new();
    }
    let pages = sites
        .find_id_by_slug(base_slug)
        .ok()
        .flatten()
        .and_then(|id| sites.list_pages(id).ok())
        .unwrap_or_default();
    submitted
        .into_iter()
        .filter_map(|slug| {
            pages.iter().find(|p| p.slug == slug).map(|page| {
                let label = if page.title.trim().is_empty() {
                    slug.clone()
                } else {
                    page.title.trim().to_string()
                };
                NavPage { slug, label }
            })
        })
        .collect()
}

/// Keep an asset id when one can be extracted, a literal URL otherwise.
fn top_bar_logo_value(value: &Value) -> Value {
    let scalar = util::first_scalar(value);
    if let Some(id) = normalize::asset_identifier(scalar) {
        return json!(id);
    }
    if let Value::String(s) = scalar {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            return json!(trimmed);
        }
    }
    json!("")
}

/// `(slug, title)` options for the navigation select; failures are empty.
fn page_options(sites: &dyn SiteLookup, base_slug: &str) -> Vec<(String, String)> {
    if base_slug.is_empty() {
        return Vec::new();
    }
    sites
        .find_id_by_slug(base_slug)
        .ok()
        .flatten()
        .and_then(|id| sites.list_pages(id).ok())
        .unwrap_or_default()
        .into_iter()
        .filter(|p| !p.slug.is_empty())
        .map(|p| {
            let title = if p.title.trim().is_empty() {
                p.slug.clone()
            } else {
                p.title.trim().to_string()
            };
            (p.slug, title)
        })
        .collect()
}
