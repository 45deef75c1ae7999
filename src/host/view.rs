//! View-layer collaborators: the logical template map and the ordered
//! template search-path list, both owned by the host rendering subsystem.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Logical-name to file-path table consulted by the host view renderer.
pub trait TemplateMap {
    /// Snapshot of the current map.
    fn get_map(&self) -> BTreeMap<String, String>;
    /// Replace the whole map.
    fn set_map(&mut self, map: BTreeMap<String, String>);
}

/// Ordered directory list the view layer scans for templates by name.
pub trait TemplateSearchPaths {
    /// Snapshot of the current path list, in search order.
    fn get_paths(&self) -> Vec<PathBuf>;
    /// Append a directory to the end of the search order.
    fn add_path(&mut self, path: &Path);
    /// Replace the whole list.
    fn set_paths(&mut self, paths: Vec<PathBuf>);
}

/// In-memory [`TemplateMap`].
#[derive(Clone, Debug, Default)]
pub struct MemoryTemplateMap {
    map: BTreeMap<String, String>,
}

impl MemoryTemplateMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map pre-populated with entries.
    #[must_use]
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        Self {
            map: entries
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }
}

impl TemplateMap for MemoryTemplateMap {
    fn get_map(&self) -> BTreeMap<String, String> {
        self.map.clone()
    }

    fn set_map(&mut self, map: BTreeMap<String, String>) {
        self.map = map;
    }
}

/// In-memory [`TemplateSearchPaths`].
#[derive(Clone, Debug, Default)]
pub struct MemorySearchPaths {
    paths: Vec<PathBuf>,
}

impl MemorySearchPaths {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TemplateSearchPaths for MemorySearchPaths {
    fn get_paths(&self) -> Vec<PathBuf> {
        self.paths.clone()
    }

    fn add_path(&mut self, path: &Path) {
        self.paths.push(path.to_path_buf());
    }

    fn set_paths(&mut self, paths: Vec<PathBuf>) {
        self.paths = paths;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_map_snapshot_is_detached() {
        let mut map = MemoryTemplateMap::with_entries(&[("home-index", "/a.html")]);
        let mut snap = map.get_map();
        snap.insert("other".into(), "/b.html".into());
        assert_eq!(map.get_map().len(), 1);
        map.set_map(snap);
        assert_eq!(map.get_map().len(), 2);
    }

    #[test]
    fn search_paths_keep_insertion_order() {
        let mut paths = MemorySearchPaths::new();
        paths.add_path(Path::new("/one"));
        paths.add_path(Path::new("/two"));
        assert_eq!(
            paths.get_paths(),
            vec![PathBuf::from("/one"), PathBuf::from("/two")]
        );
    }
}
