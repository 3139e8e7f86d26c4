use clauselens::infrastructure::text_processing::sanitize_extracted_text;

#[test]
fn given_internal_whitespace_runs_when_sanitizing_then_collapses_to_single_spaces() {
    assert_eq!(
        sanitize_extracted_text("The   tenant \t shall  pay"),
        "The tenant shall pay"
    );
}

#[test]
fn given_blank_line_runs_when_sanitizing_then_one_paragraph_break_remains() {
    let raw = "First paragraph.\n\n\n\nSecond paragraph.";
    assert_eq!(
        sanitize_extracted_text(raw),
        "First paragraph.\n\nSecond paragraph."
    );
}

#[test]
fn given_single_line_breaks_when_sanitizing_then_they_are_kept() {
    let raw = "Line one.\nLine two.";
    assert_eq!(sanitize_extracted_text(raw), "Line one.\nLine two.");
}

#[test]
fn given_padded_lines_when_sanitizing_then_edges_are_trimmed() {
    let raw = "   \n  Clause text.  \n   ";
    assert_eq!(sanitize_extracted_text(raw), "Clause text.");
}

#[test]
fn given_empty_input_when_sanitizing_then_returns_empty_string() {
    assert_eq!(sanitize_extracted_text(""), "");
    assert_eq!(sanitize_extracted_text("\n\n  \n"), "");
}
