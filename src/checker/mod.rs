mod result;
mod threshold;

pub use result::{CheckResult, CheckStatus};
pub use threshold::{AuditReport, ThresholdChecker};

use std::path::Path;

use crate::counter::LineStats;

pub trait Checker {
    /// Check a file's line stats against the configured limit.
    fn check(&self, path: &Path, stats: &LineStats) -> CheckResult;
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
