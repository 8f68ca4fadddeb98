use indexmap::IndexMap;
use serde::Serialize;

/// How often one path appears in the change history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TouchRecord {
    pub path: String,
    pub touches: usize,
}

/// Count how often each accepted path occurs and keep those touched more than
/// `threshold` times, most-touched first.
///
/// Surrounding whitespace is not part of a path. Paths with equal counts
/// stay in the order they first appeared.
pub fn tally<I, S, P>(paths: I, predicate: P, threshold: usize) -> Vec<TouchRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: Fn(&str) -> bool,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for path in paths {
        let path = path.as_ref().trim();
        if !path.is_empty() && predicate(path) {
            *counts.entry(path.to_string()).or_insert(0) += 1;
        }
    }

    let mut records: Vec<TouchRecord> = counts
        .into_iter()
        .filter(|&(_, touches)| touches > threshold)
        .map(|(path, touches)| TouchRecord { path, touches })
        .collect();
    records.sort_by(|a, b| b.touches.cmp(&a.touches));
    records
}

#[cfg(test)]
#[path = "tally_tests.rs"]
mod tests;
