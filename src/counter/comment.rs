//! Single-pass recognition of C-family comments.
//!
//! Only `//` line comments and `/* */` block comments are recognised. Markers
//! inside string literals are not special-cased, so `"http://x"` ends the
//! effective text at the `//`.

const LINE_COMMENT: &[u8] = b"//";
const BLOCK_OPEN: &[u8] = b"/*";
const BLOCK_CLOSE: &[u8] = b"*/";

/// Classification of one physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

/// Comment state carried from one physical line to the next.
///
/// A fresh state must be used for every file; the flag only describes an
/// unterminated `/*` seen earlier in the *same* file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    in_block_comment: bool,
}

impl ScanState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            in_block_comment: false,
        }
    }

    /// Whether the previous line left a block comment open.
    #[must_use]
    pub const fn in_block_comment(&self) -> bool {
        self.in_block_comment
    }

    /// Classify a physical line and advance the block-comment state.
    ///
    /// Blank lines are decided on the raw line before any comment handling, so a
    /// blank line inside a block comment is still `Blank` and leaves the state
    /// untouched.
    pub fn classify(&mut self, line: &str) -> LineKind {
        if line.trim().is_empty() {
            return LineKind::Blank;
        }

        if self.effective_text(line).trim().is_empty() {
            LineKind::Comment
        } else {
            LineKind::Code
        }
    }

    /// Return the part of `line` that lies outside comments.
    ///
    /// Block comments may open and close several times on one line; an opener
    /// without a closer leaves the state inside a block comment for the next
    /// line. A `//` outside a block comment drops the rest of the line.
    pub fn effective_text(&mut self, line: &str) -> String {
        let bytes = line.as_bytes();
        let mut effective = String::with_capacity(line.len());
        let mut segment_start = 0;
        let mut i = 0;

        while i < bytes.len() {
            let rest = &bytes[i..];

            if self.in_block_comment {
                if rest.starts_with(BLOCK_CLOSE) {
                    self.in_block_comment = false;
                    i += BLOCK_CLOSE.len();
                    segment_start = i;
                } else {
                    i += 1;
                }
                continue;
            }

            if rest.starts_with(LINE_COMMENT) {
                // Markers are ASCII, so `i` is always a char boundary.
                effective.push_str(&line[segment_start..i]);
                return effective;
            }

            if rest.starts_with(BLOCK_OPEN) {
                effective.push_str(&line[segment_start..i]);
                self.in_block_comment = true;
                i += BLOCK_OPEN.len();
                continue;
            }

            i += 1;
        }

        if !self.in_block_comment {
            effective.push_str(&line[segment_start..]);
        }

        effective
    }
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
