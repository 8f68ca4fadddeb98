//! Change-frequency ("hotspot") analysis over version-control history.

mod git;
mod tally;

pub use git::GitHistory;
pub use tally::{TouchRecord, tally};

use tracing::{debug, warn};

use crate::error::Result;

/// Supplies the flat, ordered list of paths touched by historical changes.
///
/// A path appears once per change that touched it.
pub trait HistorySource {
    /// # Errors
    /// Returns an error if the history cannot be read.
    fn modified_paths(&self) -> Result<Vec<String>>;
}

/// Read the history, degrading to an empty list when the source fails.
pub fn collect_history(source: &dyn HistorySource) -> Vec<String> {
    match source.modified_paths() {
        Ok(paths) => {
            debug!(entries = paths.len(), "loaded change history");
            paths
        }
        Err(e) => {
            warn!("change history unavailable, reporting no hotspots: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
