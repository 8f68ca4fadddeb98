use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::checker::{AuditReport, Checker, ThresholdChecker};
use crate::cli::{CheckArgs, Cli};
use crate::counter::{LineStats, SlocCounter};
use crate::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, ScanProgress, TextFormatter,
};
use crate::scanner::{DirectoryScanner, FileScanner};
use crate::{EXIT_CONFIG_ERROR, Result};

use super::context::{
    apply_scanner_overrides, build_filter, color_choice_to_mode, display_path, load_config,
    resolve_root, write_output,
};

/// Files at or above this size are streamed instead of read whole (10 MB).
const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024;

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Scan, count and gate every source file under the root.
///
/// # Errors
/// Returns an error if the configuration is invalid, the root does not exist,
/// or the report cannot be written.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Configuration, then CLI overrides
    let mut config = load_config(args.config.as_deref(), cli.no_config, &args.root)?;
    apply_scanner_overrides(
        &mut config.scanner,
        args.ext.as_deref(),
        &args.exclude_dir,
        &args.exclude,
    );
    if let Some(max_lines) = args.max_lines {
        config.content.max_lines = max_lines;
    }

    // 2. Resolve the file set
    let root = resolve_root(&args.root)?;
    let scanner = DirectoryScanner::new(build_filter(&config.scanner)?);
    let files = scanner.scan(&root)?;
    info!(files = files.len(), root = %root.display(), "scanning source files");

    // 3. Count and check, one file at a time
    let counter = SlocCounter::new();
    let checker = ThresholdChecker::new(config.content.max_lines);
    let progress = ScanProgress::new(files.len() as u64, cli.quiet);
    let results = files
        .iter()
        .map(|path| {
            let stats = count_file_lines(path, &counter);
            progress.inc();
            checker.check(&display_path(path, &root), &stats)
        })
        .collect();
    progress.finish();
    let report = checker.report(results);

    // 4. Report
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &report, color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    if report.has_violations() {
        let formatter = TextFormatter::new(color_mode);
        eprint!("{}", formatter.format_violations(&report));
    }

    debug!(
        violations = report.violations().count(),
        max_sloc = report.max_sloc(),
        "check finished"
    );
    Ok(report.exit_code())
}

/// Count one file. A file that cannot be read contributes zero lines.
pub(crate) fn count_file_lines(path: &Path, counter: &SlocCounter) -> LineStats {
    match try_count_file_lines(path, counter) {
        Ok(stats) => stats,
        Err(e) => {
            warn!(path = %path.display(), "failed to read file, counting as empty: {e}");
            LineStats::default()
        }
    }
}

fn try_count_file_lines(path: &Path, counter: &SlocCounter) -> std::io::Result<LineStats> {
    let metadata = fs::metadata(path)?;

    if metadata.len() >= LARGE_FILE_THRESHOLD {
        let reader = BufReader::new(File::open(path)?);
        counter.count_reader(reader)
    } else {
        let bytes = fs::read(path)?;
        Ok(counter.count(&String::from_utf8_lossy(&bytes)))
    }
}

pub(crate) fn format_output(
    format: OutputFormat,
    report: &AuditReport,
    color_mode: ColorMode,
    verbose: u8,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
