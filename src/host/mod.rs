//! Interfaces to the host content-management platform.
//!
//! The engine never talks to the host directly; everything it needs is
//! injected through the traits in this module. In-memory implementations
//! are provided for embedding and for tests. Public re-exports keep the
//! `crate::host::*` API stable.

/// Site and asset read APIs.
mod api;
/// Key-value settings store.
mod settings;
/// Theme registry with duck-typed theme handles.
mod themes;
/// View-layer template map and search-path list.
mod view;

pub use api::{AssetReader, MemoryAssets, MemorySites, PageRef, SiteLookup, SiteRef};
pub use settings::{MemorySettings, SettingsStore, get_bool, get_string};
pub use themes::{JsonTheme, StaticThemeRegistry, ThemeHandle, ThemeRegistry};
pub use view::{
    MemorySearchPaths, MemoryTemplateMap, TemplateMap, TemplateSearchPaths,
};
