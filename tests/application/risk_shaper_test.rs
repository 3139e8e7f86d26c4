use clauselens::application::services::shape_risks;
use clauselens::domain::Severity;

#[test]
fn given_well_formed_lines_when_shaping_then_one_record_per_line_in_order() {
    let raw = "Indemnity: You pay for everything.\n\
               Critical termination: Landlord can evict at will.\n\
               Minor fee: Small late charge.";

    let risks = shape_risks(raw);

    assert_eq!(risks.len(), 3);
    assert_eq!(risks[0].term, "Indemnity");
    assert_eq!(risks[0].severity, Severity::Medium);
    assert_eq!(risks[1].term, "Critical termination");
    assert_eq!(risks[1].severity, Severity::High);
    assert_eq!(risks[2].term, "Minor fee");
    assert_eq!(risks[2].severity, Severity::Low);
}

#[test]
fn given_line_without_colon_when_shaping_then_line_is_dropped() {
    let raw = "Here are the risks I found\nIndemnity: You pay for everything.";

    let risks = shape_risks(raw);

    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].term, "Indemnity");
}

#[test]
fn given_blank_lines_when_shaping_then_they_are_skipped() {
    let raw = "\n\nIndemnity: You pay.\n   \nArbitration: No court.\n\n";

    let risks = shape_risks(raw);

    assert_eq!(risks.len(), 2);
    assert_eq!(risks[0].term, "Indemnity");
    assert_eq!(risks[1].term, "Arbitration");
}

#[test]
fn given_colon_in_explanation_when_shaping_then_splits_at_first_colon_only() {
    let raw = "Notice period: Must notify within 3 days: otherwise void.";

    let risks = shape_risks(raw);

    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].term, "Notice period");
    assert_eq!(
        risks[0].explanation,
        "Must notify within 3 days: otherwise void."
    );
}

#[test]
fn given_empty_term_when_shaping_then_line_is_dropped() {
    let risks = shape_risks(": explanation without a term");
    assert!(risks.is_empty());
}

#[test]
fn given_empty_explanation_when_shaping_then_line_is_dropped() {
    let risks = shape_risks("Term without explanation:   ");
    assert!(risks.is_empty());
}

#[test]
fn given_padded_parts_when_shaping_then_both_are_trimmed() {
    let risks = shape_risks("   Indemnity   :   You pay.   ");

    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].term, "Indemnity");
    assert_eq!(risks[0].explanation, "You pay.");
}

#[test]
fn given_empty_input_when_shaping_then_returns_no_records() {
    assert!(shape_risks("").is_empty());
    assert!(shape_risks("\n\n\n").is_empty());
}
