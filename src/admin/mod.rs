//! Admin-facing hooks: config-form state, submission handling, and the
//! install/uninstall lifecycle. Public re-exports keep the
//! `crate::admin::*` API stable.

/// Config-form state and submission handling.
mod form;
/// Install and uninstall hooks.
mod lifecycle;
/// User-facing messages collected during a save.
mod messages;

pub use form::{FormDeps, FormState, Outcome, form_state, handle_submission};
pub use lifecycle::{install, uninstall};
pub use messages::{Level, Message, Messenger};
