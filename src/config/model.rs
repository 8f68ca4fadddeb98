use serde::{Deserialize, Serialize};

/// Scanner configuration: which files count as sources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Accepted file extensions, with or without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names pruned from the walk wherever they occur.
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// Glob patterns for individual files to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude_dirs: default_exclude_dirs(),
            exclude: Vec::new(),
        }
    }
}

/// Content configuration for the line limit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Maximum effective lines per file.
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            max_lines: default_max_lines(),
        }
    }
}

/// Change-frequency report settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HotspotsConfig {
    /// Files touched more than this many times are listed.
    #[serde(default = "default_hotspot_threshold")]
    pub threshold: usize,
}

impl Default for HotspotsConfig {
    fn default() -> Self {
        Self {
            threshold: default_hotspot_threshold(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub hotspots: HotspotsConfig,
}

fn default_extensions() -> Vec<String> {
    ["cpp", "c", "cc", "h", "hpp"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_exclude_dirs() -> Vec<String> {
    ["extern", "build"].into_iter().map(String::from).collect()
}

const fn default_max_lines() -> usize {
    500
}

const fn default_hotspot_threshold() -> usize {
    3
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
