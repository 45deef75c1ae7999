//! Settings-driven reconciliation of the host view layer.
//!
//! Toggling the override setting must consistently install or remove the
//! `home-index` template-map entry and the module's view directory on the
//! template search path, restore pre-override state when disabling, and
//! stay idempotent across repeated applications. Public re-exports keep
//! the `crate::engine::*` API stable.

/// Capture and restore of the pre-override template path.
mod original;
/// Template-map and search-path reconciliation.
mod reconcile;
/// Home-route rewrite while the override is active.
mod routes;

pub use original::{capture_if_absent, restore};
pub use reconcile::{apply, apply_from_settings};
pub use routes::rewrite_home_route;
