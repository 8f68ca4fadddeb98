use std::io::BufRead;

use serde::Serialize;

use super::{LineKind, ScanState};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineStats {
    pub total: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            comment: 0,
            blank: 0,
        }
    }

    /// Effective source lines: lines with any content outside comments.
    #[must_use]
    pub const fn sloc(&self) -> usize {
        self.code
    }

    const fn record(&mut self, kind: LineKind) {
        self.total += 1;
        match kind {
            LineKind::Blank => self.blank += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Code => self.code += 1,
        }
    }
}

/// Counts effective source lines of C-family text.
///
/// Every call starts from a fresh [`ScanState`], so counting the same content
/// twice always yields the same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlocCounter;

impl SlocCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn count(&self, source: &str) -> LineStats {
        let mut stats = LineStats::new();
        let mut state = ScanState::new();

        for line in source.lines() {
            stats.record(state.classify(line));
        }

        stats
    }

    /// Count lines from a buffered reader (streaming, memory-efficient for large files).
    ///
    /// Invalid UTF-8 is decoded lossily rather than treated as an error.
    ///
    /// # Errors
    /// Returns an I/O error if reading from the reader fails.
    pub fn count_reader<R: BufRead>(&self, mut reader: R) -> std::io::Result<LineStats> {
        let mut stats = LineStats::new();
        let mut state = ScanState::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            let line = String::from_utf8_lossy(&buf);
            stats.record(state.classify(&line));
        }

        Ok(stats)
    }
}

/// Number of effective code lines in `content`.
#[must_use]
pub fn count_code_lines(content: &str) -> usize {
    SlocCounter::new().count(content).sloc()
}

#[cfg(test)]
#[path = "sloc_tests.rs"]
mod tests;
