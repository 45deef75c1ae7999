//! Install/uninstall round-trips against the view-layer collaborators.

use std::path::PathBuf;

use global_landing::admin;
use global_landing::config;
use global_landing::engine;
use global_landing::host::{
    MemorySearchPaths, MemorySettings, MemoryTemplateMap, TemplateMap, TemplateSearchPaths,
};

#[test]
fn install_override_uninstall_leaves_no_trace() {
    let root = tempfile::tempdir().expect("tempdir");
    let template = root
        .path()
        .join("clean")
        .join(config::THEME_TEMPLATE_RELPATH);
    std::fs::create_dir_all(template.parent().expect("template parent")).expect("fixture dir");
    std::fs::write(&template, "<html/>").expect("fixture file");
    let view_dir = root.path().join("module-view");
    std::fs::create_dir_all(&view_dir).expect("fixture dir");

    let mut settings = MemorySettings::new();
    let mut map = MemoryTemplateMap::with_entries(&[(config::LOGICAL_TEMPLATE, "/host/home.html")]);
    let mut paths = MemorySearchPaths::new();
    paths.add_path(&PathBuf::from("/host/view"));
    let map_before = map.get_map();
    let paths_before = paths.get_paths();

    admin::install(&mut settings);
    engine::apply(&mut settings, &mut map, &mut paths, true, Some(&template), &view_dir);
    assert_ne!(map.get_map(), map_before);
    assert_eq!(paths.get_paths().len(), 2);

    admin::uninstall(&mut settings, &mut map, &mut paths, &view_dir);
    assert!(settings.keys().is_empty());
    assert_eq!(map.get_map(), map_before);
    assert_eq!(paths.get_paths(), paths_before);
}
