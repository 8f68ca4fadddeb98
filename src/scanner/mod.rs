mod filter;

pub use filter::{FileFilter, SourceFilter};

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Result, SlocAuditError};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths in traversal order.
    ///
    /// # Errors
    /// Returns an error if `root` does not exist or is not a directory.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Walks a tree, pruning excluded directories before descending into them.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
            // The root is always entered, whatever its name.
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || self.filter.should_descend(entry.file_name())
        });

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("skipping unreadable entry: {e}");
                    continue;
                }
            };

            // Filters see the same root-relative form that history paths use.
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            if entry.file_type().is_file() && self.filter.should_include(relative) {
                files.push(entry.into_path());
            }
        }

        debug!(root = %root.display(), files = files.len(), "resolved source files");
        files
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(SlocAuditError::RootNotFound(root.to_path_buf()));
        }
        Ok(self.scan_impl(root))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
