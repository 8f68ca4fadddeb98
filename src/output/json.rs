use serde::Serialize;

use crate::checker::{AuditReport, CheckResult, CheckStatus};
use crate::counter::LineStats;
use crate::error::Result;
use crate::history::TouchRecord;

use super::{HotspotFormatter, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    results: Vec<FileResult<'a>>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    passed: usize,
    failed: usize,
    limit: usize,
    max_sloc: usize,
}

#[derive(Serialize)]
struct FileResult<'a> {
    path: String,
    status: &'static str,
    sloc: usize,
    limit: usize,
    usage_percent: f64,
    stats: &'a LineStats,
}

#[derive(Serialize)]
struct HotspotOutput<'a> {
    threshold: usize,
    hotspots: &'a [TouchRecord],
}

fn convert_result(result: &CheckResult) -> FileResult<'_> {
    FileResult {
        path: result.path().to_string_lossy().replace('\\', "/"),
        status: match result.status {
            CheckStatus::Passed => "passed",
            CheckStatus::Failed => "failed",
        },
        sloc: result.sloc(),
        limit: result.limit,
        usage_percent: result.usage_percent(),
        stats: &result.stats,
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total_files: report.results().len(),
                passed: report.compliant().count(),
                failed: report.violations().count(),
                limit: report.limit(),
                max_sloc: report.max_sloc(),
            },
            results: report.results().iter().map(convert_result).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

impl HotspotFormatter for JsonFormatter {
    fn format_hotspots(&self, records: &[TouchRecord], threshold: usize) -> Result<String> {
        let output = HotspotOutput {
            threshold,
            hotspots: records,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
