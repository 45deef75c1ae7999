//! Settings reconciliation and template-override engine for a CMS global
//! landing page.
//!
//! A host content-management platform owns routing, rendering, and
//! persistence; this crate owns the logic in between: normalizing raw
//! admin-form submissions, reconciling the override setting with the
//! host's template map and search paths (restoring pre-override state on
//! disable), discovering themes that can supply the landing template, and
//! resolving the data the landing page renders. All host access goes
//! through the collaborator traits in [`host`].

pub mod admin;
pub mod config;
pub mod engine;
pub mod host;
pub mod landing;
pub mod normalize;
pub mod themes;
pub mod util;
