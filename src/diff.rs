//! Diff engine - select filings not yet in the seen-set
//!
//! Pure function, no side effects. The caller decides what to do with the
//! new filings and when to fold them back into the persisted state.

use std::collections::HashSet;

use crate::models::Filing;

/// Return the filings whose identifier is not in `seen`, preserving the
/// order of `fetched`
#[must_use]
pub fn new_filings<'a>(fetched: &'a [Filing], seen: &HashSet<String>) -> Vec<&'a Filing> {
    fetched.iter().filter(|f| !seen.contains(&f.id)).collect()
}
