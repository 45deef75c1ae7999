//! Assembles the landing-page configuration from settings and host lookups.

use serde_json::Value;

use super::assets::{self, Logo};
use crate::config;
use crate::host::{AssetReader, SettingsStore, SiteLookup, SiteRef, get_bool, get_string};
use crate::normalize;

/// Where a navigation item points. URL construction is the host router's
/// concern; this crate only names the target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// The landing page itself.
    Home,
    /// The site explore listing.
    Explore,
    /// A page of the configured base site.
    Page {
        /// Slug of the base site.
        site_slug: String,
        /// Slug of the page within it.
        page_slug: String,
    },
}

/// One entry of the header navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Display label.
    pub label: String,
    /// Link target.
    pub target: NavTarget,
}

/// Top-bar configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopBar {
    /// Whether the bar is rendered at all.
    pub show: bool,
    /// Optional logo; `None` renders the headline text instead.
    pub logo: Option<Logo>,
}

/// Everything the landing-page renderer needs.
#[derive(Clone, Debug)]
pub struct LandingConfig {
    /// Main headline.
    pub headline: String,
    /// Lead paragraph under the headline.
    pub lead: String,
    /// Featured sites, in configured order; deleted sites are skipped.
    pub featured_sites: Vec<SiteRef>,
    /// Header navigation, in menu order.
    pub nav_items: Vec<NavItem>,
    /// Header logos; falls back to the bundled defaults.
    pub logos: Vec<Logo>,
    /// Top-bar configuration.
    pub top_bar: TopBar,
}

/// What: Resolve the landing-page configuration.
///
/// Inputs:
/// - `settings`: Persisted module settings.
/// - `sites`: Site lookup for featured sites.
/// - `assets`: Asset reads for logos.
/// - `headline`, `lead`: Host-translated copy; the headline doubles as
///   the alt-text fallback.
///
/// Output:
/// - A fully resolved [`LandingConfig`].
///
/// Details:
/// - Every lookup is best-effort: failures skip the entry, so a deleted
///   featured site or asset never breaks the page.
#[must_use]
pub fn resolve(
    settings: &dyn SettingsStore,
    sites: &dyn SiteLookup,
    assets: &dyn AssetReader,
    headline: &str,
    lead: &str,
) -> LandingConfig {
    LandingConfig {
        headline: headline.to_string(),
        lead: lead.to_string(),
        featured_sites: resolve_featured(settings, sites),
        nav_items: build_navigation(settings),
        logos: resolve_logos(settings, assets, headline),
        top_bar: resolve_top_bar(settings, assets, headline),
    }
}

fn resolve_featured(settings: &dyn SettingsStore, sites: &dyn SiteLookup) -> Vec<SiteRef> {
    let mut out = Vec::new();
    for id in config::read_featured_sites(settings) {
        match sites.find_site(id) {
            Ok(Some(site)) => out.push(site),
            Ok(None) => tracing::debug!(id, "featured site no longer exists; skipped"),
            Err(e) => tracing::debug!(id, error = %e, "featured site lookup failed; skipped"),
        }
    }
    out
}

/// Fixed Home/Explore entries followed by the configured base-site pages.
fn build_navigation(settings: &dyn SettingsStore) -> Vec<NavItem> {
    let mut items = vec![
        NavItem {
            label: "Home".to_string(),
            target: NavTarget::Home,
        },
        NavItem {
            label: "Explore sites".to_string(),
            target: NavTarget::Explore,
        },
    ];
    let base_slug = get_string(settings, config::BASE_SITE, "");
    if base_slug.is_empty() {
        return items;
    }
    for page in config::read_nav_pages(settings) {
        let slug = page.slug.trim().to_string();
        if slug.is_empty() {
            continue;
        }
        let label = if page.label.trim().is_empty() {
            slug.clone()
        } else {
            page.label.trim().to_string()
        };
        items.push(NavItem {
            label,
            target: NavTarget::Page {
                site_slug: base_slug.clone(),
                page_slug: slug,
            },
        });
    }
    items
}

fn resolve_logos(
    settings: &dyn SettingsStore,
    assets: &dyn AssetReader,
    headline: &str,
) -> Vec<Logo> {
    let mut logos = Vec::new();
    for reference in config::read_string_list(settings, config::LOGOS) {
        let reference = Value::String(reference);
        let Some(id) = normalize::asset_identifier(&reference) else {
            continue;
        };
        match assets.read(id) {
            Ok(Some(asset)) => {
                if let Some(logo) = assets::extract_logo(&asset, headline) {
                    logos.push(logo);
                }
            }
            Ok(None) => tracing::debug!(id, "logo asset no longer exists; skipped"),
            Err(e) => tracing::debug!(id, error = %e, "logo asset read failed; skipped"),
        }
    }
    if !logos.is_empty() {
        return logos;
    }
    config::DEFAULT_LOGOS
        .iter()
        .map(|filename| {
            let label = assets::label_from_filename(filename);
            Logo {
                src: format!("img/{filename}"),
                alt: if label.is_empty() {
                    headline.to_string()
                } else {
                    label
                },
            }
        })
        .collect()
}

fn resolve_top_bar(
    settings: &dyn SettingsStore,
    assets: &dyn AssetReader,
    headline: &str,
) -> TopBar {
    TopBar {
        show: get_bool(settings, config::SHOW_TOP_BAR, true),
        logo: top_bar_logo(&config::read_top_bar_logo(settings), assets, headline),
    }
}

fn top_bar_logo(reference: &Value, assets: &dyn AssetReader, headline: &str) -> Option<Logo> {
    if let Some(id) = normalize::asset_identifier(reference) {
        return match assets.read(id) {
            Ok(Some(asset)) => assets::extract_logo(&asset, headline),
            Ok(None) => None,
            Err(e) => {
                tracing::debug!(id, error = %e, "top bar asset read failed");
                None
            }
        };
    }
    if let Value::String(s) = reference {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            // Literal URL configured directly.
            return Some(Logo {
                src: trimmed.to_string(),
                alt: headline.to_string(),
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MemoryAssets, MemorySettings, MemorySites};
    use serde_json::json;

    fn seeded() -> (MemorySettings, MemorySites, MemoryAssets) {
        let mut settings = MemorySettings::new();
        crate::admin::install(&mut settings);
        (settings, MemorySites::new(), MemoryAssets::new())
    }

    #[test]
    fn featured_sites_skip_missing_entries() {
        let (mut settings, mut sites, assets) = seeded();
        sites.add_site(1, "alpha", "Alpha");
        sites.add_site(3, "gamma", "Gamma");
        settings.set(config::FEATURED_SITES, json!([3, 2, 1]));

        let resolved = resolve(&settings, &sites, &assets, "Headline", "Lead");
        let ids: Vec<_> = resolved.featured_sites.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn navigation_includes_base_site_pages_in_order() {
        let (mut settings, sites, assets) = seeded();
        settings.set(config::BASE_SITE, json!("main"));
        config::save_nav_pages(
            &mut settings,
            &[
                config::NavPage {
                    slug: "about".into(),
                    label: "About".into(),
                },
                config::NavPage {
                    slug: "faq".into(),
                    label: " ".into(),
                },
            ],
        );

        let resolved = resolve(&settings, &sites, &assets, "H", "L");
        assert_eq!(resolved.nav_items.len(), 4);
        assert_eq!(resolved.nav_items[0].target, NavTarget::Home);
        assert_eq!(resolved.nav_items[1].target, NavTarget::Explore);
        assert_eq!(resolved.nav_items[2].label, "About");
        // Blank label falls back to the slug.
        assert_eq!(resolved.nav_items[3].label, "faq");
        assert_eq!(
            resolved.nav_items[3].target,
            NavTarget::Page {
                site_slug: "main".into(),
                page_slug: "faq".into()
            }
        );
    }

    #[test]
    fn navigation_omits_pages_without_base_site() {
        let (mut settings, sites, assets) = seeded();
        config::save_nav_pages(
            &mut settings,
            &[config::NavPage {
                slug: "about".into(),
                label: "About".into(),
            }],
        );
        let resolved = resolve(&settings, &sites, &assets, "H", "L");
        assert_eq!(resolved.nav_items.len(), 2);
    }

    #[test]
    fn logos_fall_back_to_bundled_defaults() {
        let (mut settings, sites, mut assets) = seeded();
        let resolved = resolve(&settings, &sites, &assets, "Headline", "L");
        assert_eq!(resolved.logos.len(), config::DEFAULT_LOGOS.len());
        assert_eq!(resolved.logos[0].src, "img/logo-main.svg");
        assert_eq!(resolved.logos[0].alt, "Logo Main");

        assets.add(5, json!({"url": "https://cdn/l.png", "alt_text": "L"}));
        settings.set(config::LOGOS, json!(["5", "99"]));
        let resolved = resolve(&settings, &sites, &assets, "Headline", "L");
        // Asset 99 is missing and skipped; asset 5 resolves.
        assert_eq!(resolved.logos.len(), 1);
        assert_eq!(resolved.logos[0].alt, "L");
    }

    #[test]
    fn top_bar_resolves_asset_id_or_literal_url() {
        let (mut settings, sites, mut assets) = seeded();
        assets.add(2, json!({"url": "https://cdn/t.png"}));

        settings.set(config::TOP_BAR_LOGO, json!(2));
        let resolved = resolve(&settings, &sites, &assets, "Headline", "L");
        assert!(resolved.top_bar.show);
        assert_eq!(
            resolved.top_bar.logo,
            Some(Logo {
                src: "https://cdn/t.png".into(),
                alt: "Headline".into()
            })
        );

        settings.set(config::TOP_BAR_LOGO, json!("https://cdn/direct.svg"));
        let resolved = resolve(&settings, &sites, &assets, "Headline", "L");
        assert_eq!(
            resolved.top_bar.logo.map(|l| l.src),
            Some("https://cdn/direct.svg".to_string())
        );

        settings.set(config::SHOW_TOP_BAR, json!(false));
        settings.set(config::TOP_BAR_LOGO, json!(""));
        let resolved = resolve(&settings, &sites, &assets, "Headline", "L");
        assert!(!resolved.top_bar.show);
        assert_eq!(resolved.top_bar.logo, None);
    }
}
