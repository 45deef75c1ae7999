//! Home-route rewrite: while the override is enabled, requests for the
//! default home route go to the landing handler. Pure routing-table
//! rewrite, no business logic.

use std::collections::BTreeMap;

use crate::config;

/// Point the home route at the landing handler (enabled) or the default
/// handler (disabled). Writes only when the table differs; idempotent.
pub fn rewrite_home_route(enabled: bool, table: &mut BTreeMap<String, String>) {
    let desired = if enabled {
        config::LANDING_HANDLER
    } else {
        config::DEFAULT_HOME_HANDLER
    };
    if table.get(config::HOME_ROUTE).map(String::as_str) != Some(desired) {
        table.insert(config::HOME_ROUTE.to_string(), desired.to_string());
    }
}
