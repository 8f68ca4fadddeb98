use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "sloc-audit")]
#[command(author, version, about = "Audit per-file source lines and change hot-spots")]
#[command(long_about = "Counts code lines per file (blank lines and C-family comments excluded) \
    and fails when any file exceeds the limit.\n\n\
    Exit codes:\n  \
    0 - All files within the limit\n  \
    1 - At least one file exceeds the limit\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check files against the line limit
    Check(CheckArgs),

    /// List files changed most often in git history
    Hotspots(HotspotsArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum code lines per file (overrides config)
    #[arg(long, visible_alias = "limit")]
    pub max_lines: Option<usize>,

    /// File extensions to check (comma-separated, e.g., cpp,h)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Directory names to skip wherever they occur (can be specified multiple times)
    #[arg(long)]
    pub exclude_dir: Vec<String>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct HotspotsArgs {
    /// Directory inside the git repository to analyze
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// List files changed more than this many times (overrides config)
    #[arg(long)]
    pub threshold: Option<usize>,

    /// File extensions to include (comma-separated, e.g., cpp,h)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Directory names to skip wherever they occur (can be specified multiple times)
    #[arg(long)]
    pub exclude_dir: Vec<String>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
