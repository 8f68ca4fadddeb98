use tracing::info;

use crate::cli::{Cli, HotspotsArgs};
use crate::history::{GitHistory, collect_history, tally};
use crate::output::{HotspotFormatter, JsonFormatter, OutputFormat, TextFormatter};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{
    apply_scanner_overrides, build_filter, color_choice_to_mode, load_config, write_output,
};

#[must_use]
pub fn run_hotspots(args: &HotspotsArgs, cli: &Cli) -> i32 {
    match run_hotspots_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// List the source files changed more often than the threshold.
///
/// Unreadable history is not an error: the report is simply empty.
///
/// # Errors
/// Returns an error if the configuration or an exclude pattern is invalid.
pub fn run_hotspots_impl(args: &HotspotsArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(args.config.as_deref(), cli.no_config, &args.root)?;
    apply_scanner_overrides(
        &mut config.scanner,
        args.ext.as_deref(),
        &args.exclude_dir,
        &args.exclude,
    );
    let threshold = args.threshold.unwrap_or(config.hotspots.threshold);
    let filter = build_filter(&config.scanner)?;

    let history = collect_history(&GitHistory::new(&args.root));
    let records = tally(history, |path| filter.accepts_relative(path), threshold);
    info!(hotspots = records.len(), threshold, "change frequency computed");

    let color_mode = color_choice_to_mode(cli.color);
    let output = match args.format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, cli.verbose)
            .format_hotspots(&records, threshold)?,
        OutputFormat::Json => JsonFormatter.format_hotspots(&records, threshold)?,
    };
    write_output(None, &output, cli.quiet)?;

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
#[path = "hotspots_tests.rs"]
mod tests;
