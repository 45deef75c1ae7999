//! Read-only site, page, and asset APIs exposed by the host platform.
//!
//! Every method is fallible with a string error; callers in this crate
//! swallow failures and degrade to "no match" so one broken lookup never
//! aborts a settings save (a deleted site must not block the admin form).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A site known to the host platform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRef {
    /// Stable numeric id.
    pub id: u64,
    /// URL-safe identifier.
    pub slug: String,
    /// Human-readable title.
    pub title: String,
}

/// A page of a site, as listed for navigation building.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    /// URL-safe identifier within its site.
    pub slug: String,
    /// Human-readable title; may be empty.
    pub title: String,
}

/// Site and page lookups against the host API.
pub trait SiteLookup {
    /// Resolve a slug to a site id.
    ///
    /// # Errors
    /// Returns the host's error message when the lookup itself fails.
    fn find_id_by_slug(&self, slug: &str) -> Result<Option<u64>, String>;

    /// Resolve a site id to its slug.
    ///
    /// # Errors
    /// Returns the host's error message when the lookup itself fails.
    fn find_slug_by_id(&self, id: u64) -> Result<Option<String>, String>;

    /// Read a site by id.
    ///
    /// # Errors
    /// Returns the host's error message when the read fails.
    fn find_site(&self, id: u64) -> Result<Option<SiteRef>, String>;

    /// List all sites, sorted by title by the host.
    ///
    /// # Errors
    /// Returns the host's error message when the search fails.
    fn list_sites(&self) -> Result<Vec<SiteRef>, String>;

    /// List the pages of a site in position order.
    ///
    /// # Errors
    /// Returns the host's error message when the search fails.
    fn list_pages(&self, site_id: u64) -> Result<Vec<PageRef>, String>;
}

/// Asset reads against the host API.
pub trait AssetReader {
    /// Read a serialized asset by id; `Ok(None)` when it does not exist.
    ///
    /// The returned value is duck-typed and probed for URL, alt text, and
    /// title keys rather than deserialized into a fixed shape, since hosts
    /// serialize assets differently across versions.
    ///
    /// # Errors
    /// Returns the host's error message when the read fails.
    fn read(&self, id: u64) -> Result<Option<Value>, String>;
}

/// In-memory [`SiteLookup`] used in tests and single-process embeddings.
#[derive(Clone, Debug, Default)]
pub struct MemorySites {
    sites: Vec<SiteRef>,
    pages: BTreeMap<u64, Vec<PageRef>>,
}

impl MemorySites {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a site.
    pub fn add_site(&mut self, id: u64, slug: &str, title: &str) {
        self.sites.push(SiteRef {
            id,
            slug: slug.to_string(),
            title: title.to_string(),
        });
    }

    /// Add a page to a site, appended in position order.
    pub fn add_page(&mut self, site_id: u64, slug: &str, title: &str) {
        self.pages.entry(site_id).or_default().push(PageRef {
            slug: slug.to_string(),
            title: title.to_string(),
        });
    }
}

impl SiteLookup for MemorySites {
    fn find_id_by_slug(&self, slug: &str) -> Result<Option<u64>, String> {
        Ok(self.sites.iter().find(|s| s.slug == slug).map(|s| s.id))
    }

    fn find_slug_by_id(&self, id: u64) -> Result<Option<String>, String> {
        Ok(self
            .sites
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.slug.clone()))
    }

    fn find_site(&self, id: u64) -> Result<Option<SiteRef>, String> {
        Ok(self.sites.iter().find(|s| s.id == id).cloned())
    }

    fn list_sites(&self) -> Result<Vec<SiteRef>, String> {
        let mut sites = self.sites.clone();
        sites.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        Ok(sites)
    }

    fn list_pages(&self, site_id: u64) -> Result<Vec<PageRef>, String> {
        Ok(self.pages.get(&site_id).cloned().unwrap_or_default())
    }
}

/// In-memory [`AssetReader`] keyed by asset id.
#[derive(Clone, Debug, Default)]
pub struct MemoryAssets {
    assets: BTreeMap<u64, Value>,
}

impl MemoryAssets {
    /// Create an empty reader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a serialized asset.
    pub fn add(&mut self, id: u64, asset: Value) {
        self.assets.insert(id, asset);
    }
}

impl AssetReader for MemoryAssets {
    fn read(&self, id: u64) -> Result<Option<Value>, String> {
        Ok(self.assets.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sites_resolve_both_directions() {
        let mut sites = MemorySites::new();
        sites.add_site(3, "media", "Media Library");
        assert_eq!(sites.find_id_by_slug("media"), Ok(Some(3)));
        assert_eq!(sites.find_slug_by_id(3), Ok(Some("media".to_string())));
        assert_eq!(sites.find_id_by_slug("ghost"), Ok(None));
        assert_eq!(sites.find_slug_by_id(9), Ok(None));
    }

    #[test]
    fn pages_keep_position_order() {
        let mut sites = MemorySites::new();
        sites.add_site(1, "main", "Main");
        sites.add_page(1, "b-first", "B First");
        sites.add_page(1, "a-second", "A Second");
        let pages = sites.list_pages(1).expect("in-memory lookup");
        assert_eq!(pages[0].slug, "b-first");
        assert_eq!(pages[1].slug, "a-second");
    }
}
