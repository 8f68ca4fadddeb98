use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SlocAuditError};

use super::Config;

pub trait ConfigLoader {
    /// Find and load the configuration that applies to a scan of `root`.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read or parsed.
    fn load(&self, root: &Path) -> Result<Config>;

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub const LOCAL_CONFIG_NAME: &str = ".sloc-audit.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Get the platform-specific configuration directory for sloc-audit.
    ///
    /// - Windows: `%APPDATA%\sloc-audit`
    /// - macOS: `~/Library/Application Support/sloc-audit`
    /// - Linux: `~/.config/sloc-audit` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "sloc-audit")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.sloc-audit.toml` in the scan root
/// 2. `.sloc-audit.toml` in the current directory
/// 3. `config.toml` in the platform-specific user config directory
/// 4. `Config::default()` if no config is found
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn candidate_paths(&self, root: &Path) -> Vec<PathBuf> {
        let mut candidates = vec![root.join(LOCAL_CONFIG_NAME)];
        if let Ok(dir) = self.fs.current_dir() {
            candidates.push(dir.join(LOCAL_CONFIG_NAME));
        }
        if let Some(dir) = self.fs.config_dir() {
            candidates.push(dir.join(USER_CONFIG_NAME));
        }
        candidates
    }

    fn parse_config(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(SlocAuditError::from)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self, root: &Path) -> Result<Config> {
        for candidate in self.candidate_paths(root) {
            if self.fs.exists(&candidate) {
                return self.load_from_path(&candidate);
            }
        }

        debug!("no configuration file found, using defaults");
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| SlocAuditError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), "loading configuration");
        Self::parse_config(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
