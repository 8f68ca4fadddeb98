use std::ffi::OsStr;
use std::path::{Component, Path};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, SlocAuditError};

pub trait FileFilter {
    /// Whether a file found during a walk should be counted. `path` is
    /// relative to the walk root.
    fn should_include(&self, path: &Path) -> bool;

    /// Whether the walk may enter a directory with this name.
    fn should_descend(&self, _dir_name: &OsStr) -> bool {
        true
    }
}

/// Extension allow-list plus directory-name and glob exclusions.
///
/// The same rules back both the directory walk and the history tally, so a
/// path counted by `check` is also eligible for `hotspots`.
#[derive(Debug, Clone)]
pub struct SourceFilter {
    extensions: Vec<String>,
    exclude_dirs: Vec<String>,
    exclude_patterns: GlobSet,
}

impl SourceFilter {
    /// Create a new filter with the given extensions, excluded directory names
    /// and exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(
        extensions: &[String],
        exclude_dirs: &[String],
        exclude_patterns: &[String],
    ) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| SlocAuditError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| SlocAuditError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            extensions: extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect(),
            exclude_dirs: exclude_dirs.to_vec(),
            exclude_patterns,
        })
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn is_excluded_dir_name(&self, name: &OsStr) -> bool {
        name.to_str()
            .is_some_and(|name| self.exclude_dirs.iter().any(|d| d == name))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }

    /// Predicate over a repository-relative path string, as found in history
    /// records. Any excluded directory name among the parent components
    /// rejects the path.
    #[must_use]
    pub fn accepts_relative(&self, path: &str) -> bool {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return false;
        }

        let path = Path::new(trimmed);
        let in_excluded_dir = path
            .parent()
            .into_iter()
            .flat_map(Path::components)
            .any(|c| matches!(c, Component::Normal(name) if self.is_excluded_dir_name(name)));

        !in_excluded_dir && self.should_include(path)
    }
}

impl FileFilter for SourceFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && !self.is_excluded(path)
    }

    fn should_descend(&self, dir_name: &OsStr) -> bool {
        !self.is_excluded_dir_name(dir_name)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
