use std::path::Path;

use crate::counter::LineStats;
use crate::{EXIT_SUCCESS, EXIT_THRESHOLD_EXCEEDED};

use super::{CheckResult, CheckStatus, Checker};

/// Applies a single per-file limit. A file fails only when its effective
/// line count is strictly greater than the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdChecker {
    limit: usize,
}

impl ThresholdChecker {
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Collect per-file results into a report ordered by line count.
    #[must_use]
    pub fn report(&self, results: Vec<CheckResult>) -> AuditReport {
        AuditReport::new(results, self.limit)
    }
}

impl Checker for ThresholdChecker {
    fn check(&self, path: &Path, stats: &LineStats) -> CheckResult {
        let status = if stats.sloc() > self.limit {
            CheckStatus::Failed
        } else {
            CheckStatus::Passed
        };

        CheckResult {
            path: path.to_path_buf(),
            stats: stats.clone(),
            limit: self.limit,
            status,
        }
    }
}

/// Every checked file, largest first.
///
/// Sorting is stable, so files with equal counts keep their discovery order.
#[derive(Debug, Clone)]
pub struct AuditReport {
    results: Vec<CheckResult>,
    limit: usize,
}

impl AuditReport {
    #[must_use]
    pub fn new(mut results: Vec<CheckResult>, limit: usize) -> Self {
        results.sort_by(|a, b| b.sloc().cmp(&a.sloc()));
        Self { results, limit }
    }

    #[must_use]
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    pub fn violations(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.is_failed())
    }

    pub fn compliant(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.is_passed())
    }

    #[must_use]
    pub fn has_violations(&self) -> bool {
        self.results.iter().any(CheckResult::is_failed)
    }

    #[must_use]
    pub fn max_sloc(&self) -> usize {
        self.results.first().map_or(0, CheckResult::sloc)
    }

    /// Process exit status for the gate: non-zero iff any file failed.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.has_violations() {
            EXIT_THRESHOLD_EXCEEDED
        } else {
            EXIT_SUCCESS
        }
    }
}
