//! Resolution of the data behind the rendered landing page.
//!
//! Everything here turns persisted settings plus host lookups into plain
//! data structures; producing markup from them is the host's concern.
//! Every lookup is best-effort: a deleted site, missing asset, or failing
//! API call drops the affected entry and never propagates.

/// Asset logo probing.
mod assets;
/// Site explore filtering.
mod explore;
/// Landing config assembly.
mod resolve;

pub use assets::{Logo, extract_logo};
pub use explore::filter_sites;
pub use resolve::{LandingConfig, NavItem, NavTarget, TopBar, resolve};
