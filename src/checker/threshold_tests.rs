use std::path::PathBuf;

use super::*;
use crate::{EXIT_SUCCESS, EXIT_THRESHOLD_EXCEEDED};

fn stats_with_code(code: usize) -> LineStats {
    LineStats {
        total: code,
        code,
        comment: 0,
        blank: 0,
    }
}

fn check_all(checker: &ThresholdChecker, counts: &[(&str, usize)]) -> Vec<CheckResult> {
    counts
        .iter()
        .map(|(path, code)| checker.check(Path::new(path), &stats_with_code(*code)))
        .collect()
}

fn paths_and_counts<'a>(results: impl Iterator<Item = &'a CheckResult>) -> Vec<(PathBuf, usize)> {
    results.map(|r| (r.path.clone(), r.sloc())).collect()
}

#[test]
fn file_under_limit_passes() {
    let checker = ThresholdChecker::new(500);
    let result = checker.check(Path::new("a.cpp"), &stats_with_code(100));

    assert!(result.is_passed());
    assert_eq!(result.limit, 500);
}

#[test]
fn file_at_limit_passes() {
    let checker = ThresholdChecker::new(500);
    let result = checker.check(Path::new("a.cpp"), &stats_with_code(500));

    assert!(result.is_passed());
}

#[test]
fn file_over_limit_fails() {
    let checker = ThresholdChecker::new(500);
    let result = checker.check(Path::new("a.cpp"), &stats_with_code(501));

    assert!(result.is_failed());
    assert_eq!(result.status, CheckStatus::Failed);
}

#[test]
fn only_code_lines_are_compared() {
    let checker = ThresholdChecker::new(10);
    let stats = LineStats {
        total: 40,
        code: 10,
        comment: 20,
        blank: 10,
    };

    assert!(checker.check(Path::new("a.cpp"), &stats).is_passed());
}

#[test]
fn report_lists_violations_in_descending_order() {
    let checker = ThresholdChecker::new(500);
    let results = check_all(&checker, &[("A", 600), ("B", 400), ("C", 501)]);
    let report = checker.report(results);

    assert_eq!(
        paths_and_counts(report.violations()),
        vec![(PathBuf::from("A"), 600), (PathBuf::from("C"), 501)]
    );
    assert!(report.has_violations());
    assert_ne!(report.exit_code(), EXIT_SUCCESS);
    assert_eq!(report.exit_code(), EXIT_THRESHOLD_EXCEEDED);
}

#[test]
fn report_without_violations_succeeds() {
    let checker = ThresholdChecker::new(500);
    let results = check_all(&checker, &[("A", 500), ("B", 400), ("C", 0)]);
    let report = checker.report(results);

    assert_eq!(report.violations().count(), 0);
    assert_eq!(report.compliant().count(), 3);
    assert!(!report.has_violations());
    assert_eq!(report.exit_code(), EXIT_SUCCESS);
}

#[test]
fn report_ties_keep_discovery_order() {
    let checker = ThresholdChecker::new(10);
    let results = check_all(
        &checker,
        &[("z.cpp", 20), ("a.cpp", 30), ("m.cpp", 20), ("b.cpp", 20)],
    );
    let report = checker.report(results);

    assert_eq!(
        paths_and_counts(report.violations()),
        vec![
            (PathBuf::from("a.cpp"), 30),
            (PathBuf::from("z.cpp"), 20),
            (PathBuf::from("m.cpp"), 20),
            (PathBuf::from("b.cpp"), 20),
        ]
    );
}

#[test]
fn report_keeps_all_results_sorted() {
    let checker = ThresholdChecker::new(500);
    let results = check_all(&checker, &[("small", 3), ("big", 900), ("mid", 250)]);
    let report = checker.report(results);

    let counts: Vec<usize> = report.results().iter().map(CheckResult::sloc).collect();
    assert_eq!(counts, vec![900, 250, 3]);
    assert_eq!(report.max_sloc(), 900);
    assert_eq!(report.limit(), 500);
}

#[test]
fn empty_report() {
    let report = ThresholdChecker::new(500).report(Vec::new());

    assert!(report.results().is_empty());
    assert_eq!(report.max_sloc(), 0);
    assert_eq!(report.exit_code(), EXIT_SUCCESS);
}

#[test]
fn usage_percent() {
    let checker = ThresholdChecker::new(200);
    let result = checker.check(Path::new("a.cpp"), &stats_with_code(50));
    assert!((result.usage_percent() - 25.0).abs() < f64::EPSILON);

    let zero = ThresholdChecker::new(0).check(Path::new("b.cpp"), &stats_with_code(5));
    assert!(zero.usage_percent().abs() < f64::EPSILON);
    assert!(zero.is_failed());
}
