use clauselens::domain::{RiskyTerm, Severity};

#[test]
fn given_term_with_critical_keyword_when_inferring_then_returns_high() {
    assert_eq!(Severity::infer("CRITICAL default"), Severity::High);
}

#[test]
fn given_term_with_severe_keyword_when_inferring_then_returns_high() {
    assert_eq!(Severity::infer("Severe penalty clause"), Severity::High);
}

#[test]
fn given_term_with_high_keyword_when_inferring_then_returns_high() {
    assert_eq!(Severity::infer("high interest rate"), Severity::High);
}

#[test]
fn given_term_with_minor_keyword_when_inferring_then_returns_low() {
    assert_eq!(Severity::infer("minor issue"), Severity::Low);
}

#[test]
fn given_term_with_low_keyword_when_inferring_then_returns_low() {
    assert_eq!(Severity::infer("Low deposit"), Severity::Low);
}

#[test]
fn given_plain_term_when_inferring_then_returns_medium() {
    assert_eq!(Severity::infer("standard clause"), Severity::Medium);
}

#[test]
fn given_term_with_both_tiers_when_inferring_then_high_wins() {
    assert_eq!(Severity::infer("critical but minor wording"), Severity::High);
}

#[test]
fn given_mixed_case_keyword_when_inferring_then_matches_case_insensitively() {
    assert_eq!(Severity::infer("SeVeRe breach"), Severity::High);
    assert_eq!(Severity::infer("MiNoR defect"), Severity::Low);
}

#[test]
fn given_risky_term_when_constructed_then_severity_comes_from_term_only() {
    let risk = RiskyTerm::new(
        "Indemnity".to_string(),
        "This is a critical problem".to_string(),
    );
    assert_eq!(risk.severity, Severity::Medium);
}

#[test]
fn given_severity_tier_when_rendered_then_matches_wire_name() {
    assert_eq!(Severity::Low.as_str(), "low");
    assert_eq!(Severity::Medium.as_str(), "medium");
    assert_eq!(Severity::High.as_str(), "high");
}

#[test]
fn given_risky_term_when_serialized_then_severity_is_lowercase() {
    let risk = RiskyTerm::new("Critical clause".to_string(), "Bad".to_string());
    let json = serde_json::to_value(&risk).unwrap();

    assert_eq!(json["term"], "Critical clause");
    assert_eq!(json["severity"], "high");
    assert_eq!(json["explanation"], "Bad");
}
