use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::ColorChoice;
use crate::config::{Config, ConfigLoader, FileConfigLoader, ScannerConfig};
use crate::output::ColorMode;
use crate::scanner::SourceFilter;
use crate::{Result, SlocAuditError};

pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load the configuration that applies to a scan of `root`.
///
/// An explicit `config_path` wins over discovery; `no_config` skips both.
///
/// # Errors
/// Returns an error if the selected file cannot be read or parsed.
pub(crate) fn load_config(
    config_path: Option<&Path>,
    no_config: bool,
    root: &Path,
) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(root), |path| loader.load_from_path(path))
}

/// Apply the file-selection flags shared by both commands.
///
/// `--ext` replaces the configured list, directory and glob exclusions add to it.
pub(crate) fn apply_scanner_overrides(
    scanner: &mut ScannerConfig,
    ext: Option<&[String]>,
    exclude_dirs: &[String],
    exclude: &[String],
) {
    if let Some(ext) = ext {
        scanner.extensions = ext.to_vec();
    }
    scanner.exclude_dirs.extend(exclude_dirs.iter().cloned());
    scanner.exclude.extend(exclude.iter().cloned());
}

/// # Errors
/// Returns an error if an exclude pattern is not a valid glob.
pub(crate) fn build_filter(scanner: &ScannerConfig) -> Result<SourceFilter> {
    SourceFilter::new(&scanner.extensions, &scanner.exclude_dirs, &scanner.exclude)
}

/// Canonical form of the scan root, without the `\\?\` prefix on Windows.
///
/// # Errors
/// Returns `RootNotFound` if the path cannot be resolved.
pub(crate) fn resolve_root(root: &Path) -> Result<PathBuf> {
    dunce::canonicalize(root).map_err(|_| SlocAuditError::RootNotFound(root.to_path_buf()))
}

/// Path as shown in reports: relative to the scan root when it lies inside it.
pub(crate) fn display_path(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
