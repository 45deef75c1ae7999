//! Case-insensitive filtering for the site explore listing.

use crate::host::SiteRef;

/// Keep sites whose title or slug contains `query`, case-insensitively.
/// A blank query returns the input unchanged.
#[must_use]
pub fn filter_sites(sites: Vec<SiteRef>, query: &str) -> Vec<SiteRef> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return sites;
    }
    sites
        .into_iter()
        .filter(|site| {
            site.title.to_lowercase().contains(&needle)
                || site.slug.to_lowercase().contains(&needle)
        })
        .collect()
}
