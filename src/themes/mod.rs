//! Discovery of installed themes that can supply the landing template.
//!
//! The registry is probed first; a direct directory scan of the themes
//! root is the fallback when the registry is unavailable or yields no
//! qualifying theme. Public re-exports keep the `crate::themes::*` API
//! stable.

/// Candidate enumeration from the registry and the directory fallback.
mod discover;
/// Ini-style theme metadata parsing.
mod meta;

pub use discover::{ThemeCandidate, list_candidates};

/// What: Build selection-control options from discovered candidates.
///
/// Inputs:
/// - `candidates`: Discovered themes, already sorted by label.
///
/// Output:
/// - `(id, display)` pairs; the display is `label (id)` when they differ,
///   so admins can tell apart themes sharing a label.
#[must_use]
pub fn options(candidates: &[ThemeCandidate]) -> Vec<(String, String)> {
    candidates
        .iter()
        .map(|c| {
            let display = if c.label == c.id {
                c.label.clone()
            } else {
                format!("{} ({})", c.label, c.id)
            };
            (c.id.clone(), display)
        })
        .collect()
}
