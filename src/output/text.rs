use std::fmt::Write;

use crate::checker::{AuditReport, CheckResult};
use crate::error::Result;
use crate::history::TouchRecord;

use super::{HotspotFormatter, OutputFormatter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_row(&self, result: &CheckResult, output: &mut String) {
        let count = format!("{:5}", result.sloc());
        let count = if result.is_failed() {
            self.colorize(&count, ansi::RED)
        } else {
            count
        };

        let _ = write!(output, "{count} | {}", result.path().display());
        if self.verbose >= 1 {
            let stats = &result.stats;
            let _ = write!(
                output,
                "  (code={}, comment={}, blank={}, total={})",
                stats.code, stats.comment, stats.blank, stats.total
            );
        }
        output.push('\n');
    }

    /// List only the violating files, for the error stream.
    #[must_use]
    pub fn format_violations(&self, report: &AuditReport) -> String {
        let mut output = String::new();
        for result in report.violations() {
            let status = self.colorize("FAILED", ansi::RED);
            let _ = writeln!(output, "✗ {status}: {}", result.path().display());
            let _ = writeln!(
                output,
                "   Lines: {} (limit: {})",
                result.sloc(),
                result.limit
            );
        }
        output
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let mut output = String::new();

        let _ = writeln!(output, "{:>5} | File", "LOC");
        let _ = writeln!(output, "------|----------------------------");
        for result in report.results() {
            self.format_row(result, &mut output);
        }
        output.push('\n');

        let limit = report.limit();
        if report.has_violations() {
            let message = format!("Files exceed {limit} LOC – see list above");
            let _ = writeln!(output, "{}", self.colorize(&message, ansi::RED));
        } else {
            let message = format!("All files ≤ {limit} LOC");
            let _ = writeln!(output, "{}", self.colorize(&message, ansi::GREEN));
        }

        Ok(output)
    }
}

impl HotspotFormatter for TextFormatter {
    fn format_hotspots(&self, records: &[TouchRecord], threshold: usize) -> Result<String> {
        let mut output = String::new();

        if records.is_empty() {
            let _ = writeln!(output, "No files exceed threshold");
            return Ok(output);
        }

        if self.verbose >= 1 {
            let _ = writeln!(output, "Files touched more than {threshold} times:");
        }
        let _ = writeln!(output, "  Touches | File");
        let _ = writeln!(output, "----------+---------------------------");
        for record in records {
            let _ = writeln!(output, "   {:<6} | {}", record.touches, record.path);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
