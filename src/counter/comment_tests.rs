use super::*;

fn classify_all(source: &str) -> Vec<LineKind> {
    let mut state = ScanState::new();
    source.lines().map(|line| state.classify(line)).collect()
}

#[test]
fn plain_code_is_code() {
    let mut state = ScanState::new();
    assert_eq!(state.classify("int x = 1;"), LineKind::Code);
    assert!(!state.in_block_comment());
}

#[test]
fn whitespace_only_is_blank() {
    let mut state = ScanState::new();
    assert_eq!(state.classify(""), LineKind::Blank);
    assert_eq!(state.classify("   \t  "), LineKind::Blank);
    assert_eq!(state.classify("\r"), LineKind::Blank);
}

#[test]
fn line_comment_alone_is_comment() {
    let mut state = ScanState::new();
    assert_eq!(state.classify("// just a note"), LineKind::Comment);
    assert_eq!(state.classify("    // indented note"), LineKind::Comment);
}

#[test]
fn code_with_trailing_line_comment_is_code() {
    let mut state = ScanState::new();
    assert_eq!(state.classify("x++; // bump"), LineKind::Code);
    assert_eq!(state.effective_text("x++; // bump"), "x++; ");
}

#[test]
fn single_line_block_comment_is_comment() {
    let mut state = ScanState::new();
    assert_eq!(state.classify("/* header */"), LineKind::Comment);
    assert!(!state.in_block_comment());
}

#[test]
fn block_comment_opened_and_closed_twice_on_one_line() {
    let mut state = ScanState::new();
    let effective = state.effective_text("code /*a*/ code /*b*/ more");
    assert_eq!(effective, "code  code  more");
    assert!(!state.in_block_comment());
}

#[test]
fn comment_only_segments_between_blocks() {
    let mut state = ScanState::new();
    assert_eq!(state.classify("/*a*/ /*b*/"), LineKind::Comment);
}

#[test]
fn unterminated_block_carries_to_next_line() {
    let mut state = ScanState::new();
    assert_eq!(state.classify("int y; /* starts here"), LineKind::Code);
    assert!(state.in_block_comment());
    assert_eq!(state.classify("int z = 3;"), LineKind::Comment);
    assert!(state.in_block_comment());
}

#[test]
fn closing_line_with_trailing_code_is_code() {
    let kinds = classify_all("/* line one\n   line two\n*/ int w;");
    assert_eq!(
        kinds,
        vec![LineKind::Comment, LineKind::Comment, LineKind::Code]
    );
}

#[test]
fn closing_line_without_code_is_comment() {
    let kinds = classify_all("/*\n * doc\n */");
    assert_eq!(
        kinds,
        vec![LineKind::Comment, LineKind::Comment, LineKind::Comment]
    );
}

#[test]
fn blank_line_inside_block_comment_is_blank_and_keeps_state() {
    let mut state = ScanState::new();
    state.classify("/* open");
    assert_eq!(state.classify(""), LineKind::Blank);
    assert!(state.in_block_comment());
    assert_eq!(state.classify("close */"), LineKind::Comment);
    assert!(!state.in_block_comment());
}

#[test]
fn line_comment_inside_block_comment_is_ignored() {
    let mut state = ScanState::new();
    state.classify("/*");
    // The `//` does not hide the closer.
    assert_eq!(state.classify("// still block */ int v;"), LineKind::Code);
    assert!(!state.in_block_comment());
}

#[test]
fn block_opener_after_line_comment_is_ignored() {
    let mut state = ScanState::new();
    assert_eq!(state.classify("// see /* not a block"), LineKind::Comment);
    assert!(!state.in_block_comment());
}

#[test]
fn close_marker_outside_block_is_plain_text() {
    let mut state = ScanState::new();
    assert_eq!(state.effective_text("a */ b"), "a */ b");
    assert!(!state.in_block_comment());
}

#[test]
fn slash_star_slash_does_not_close_itself() {
    let mut state = ScanState::new();
    assert_eq!(state.classify("/*/ still inside"), LineKind::Comment);
    assert!(state.in_block_comment());
}

#[test]
fn markers_inside_strings_are_not_special_cased() {
    let mut state = ScanState::new();
    assert_eq!(
        state.effective_text("const char* url = \"http://example.com\";"),
        "const char* url = \"http:"
    );
}

#[test]
fn multibyte_text_around_markers() {
    let mut state = ScanState::new();
    assert_eq!(state.effective_text("größe /* ü */ = 1; // ß"), "größe  = 1; ");
}

#[test]
fn new_state_is_outside_comment() {
    assert!(!ScanState::new().in_block_comment());
    assert_eq!(ScanState::default(), ScanState::new());
}
