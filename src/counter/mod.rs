mod comment;
mod sloc;

pub use comment::{LineKind, ScanState};
pub use sloc::{LineStats, SlocCounter, count_code_lines};
