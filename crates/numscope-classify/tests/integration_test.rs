//! Integration tests for the classification engine
//!
//! Tests the complete flow of input parsing, configuration, check
//! registration, classification, and report rendering.

use numscope_classify::{
    render, CheckDefinition, CheckRegistry, Classifier, ClassifyError,
};
use numscope_core::input::{extract_integer, parse_integer};
use numscope_core::{AppConfig, CheckId, ReportConfig};
use std::sync::atomic::{AtomicUsize, Ordering};

fn check_id(id: &str) -> CheckId {
    CheckId::new(id).expect("valid check id")
}

#[test]
fn test_end_to_end_classification_flow() {
    let classifier = Classifier::with_builtin_checks();

    // 153 = 1^3 + 5^3 + 3^3, not happy, not a palindrome
    let result = classifier.classify(153).expect("classify 153");
    assert_eq!(result.value(), 153);
    assert_eq!(result.labels(), vec!["Armstrong Number"]);

    // 7 is a single-digit Armstrong number, happy, and prime
    let result = classifier.classify(7).expect("classify 7");
    assert_eq!(
        result.labels(),
        vec!["Armstrong Number", "Happy Number", "Palindrome", "Prime Number"]
    );

    // 28 is perfect
    let result = classifier.classify(28).expect("classify 28");
    assert_eq!(result.labels(), vec!["Happy Number", "Perfect Number"]);

    // 154 matches nothing but every check still reports an outcome
    let result = classifier.classify(154).expect("classify 154");
    assert!(result.is_empty());
    assert_eq!(result.outcomes().len(), 5);
}

#[test]
fn test_typed_input_flow() {
    // Typed input arrives as text; the full path is parse -> classify -> render
    let value = parse_integer("  153 ").expect("parse typed input");
    let classifier = Classifier::with_builtin_checks();
    let result = classifier.classify(value).expect("classify parsed value");

    let report = render(&result, &ReportConfig::default());
    assert_eq!(report, "Properties of 153:\n  - Armstrong Number");
}

#[test]
fn test_extracted_input_flow() {
    // OCR-style input carries surrounding text; the first digit run wins
    let value = extract_integer("Invoice #370 dated 2026-08-06").expect("extract number");
    assert_eq!(value, 370);

    let classifier = Classifier::with_builtin_checks();
    let result = classifier.classify(value).expect("classify extracted value");
    assert_eq!(result.labels(), vec!["Armstrong Number"]);
}

#[test]
fn test_config_driven_check_selection() {
    let mut config = AppConfig::default();
    config.classifier.enabled_checks = vec!["armstrong".to_string(), "prime".to_string()];

    let enabled = config
        .classifier
        .enabled_check_ids()
        .expect("valid configured ids");

    let classifier = Classifier::with_builtin_checks();
    let result = classifier
        .classify_with(153, &enabled)
        .expect("classify with configured checks");

    // Only the two configured checks are evaluated
    assert_eq!(result.outcomes().len(), 2);
    assert_eq!(result.labels(), vec!["Armstrong Number"]);
}

#[test]
fn test_disabled_checks_are_never_evaluated() {
    static TRIPWIRE_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn tripwire(_value: i64) -> numscope_classify::Result<bool> {
        TRIPWIRE_CALLS.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    let registry = CheckRegistry::builtin();
    registry.insert(CheckDefinition::new(
        check_id("tripwire"),
        "Tripwire",
        tripwire,
    ));

    let classifier = Classifier::new(registry);
    let result = classifier
        .classify_with(153, &[check_id("armstrong")])
        .expect("classify with filter");

    assert_eq!(result.labels(), vec!["Armstrong Number"]);
    assert_eq!(
        TRIPWIRE_CALLS.load(Ordering::SeqCst),
        0,
        "disabled check must not run"
    );

    // Enabling it runs it exactly once per classification
    classifier
        .classify_with(153, &[check_id("tripwire")])
        .expect("classify tripwire only");
    assert_eq!(TRIPWIRE_CALLS.load(Ordering::SeqCst), 1);
}

#[test]
fn test_registering_new_check_preserves_existing_results() {
    fn is_even(value: i64) -> numscope_classify::Result<bool> {
        Ok(value % 2 == 0)
    }

    let baseline = Classifier::with_builtin_checks();
    let before = baseline.classify(153).expect("classify before");

    let registry = CheckRegistry::builtin();
    registry.insert(CheckDefinition::new(check_id("even"), "Even Number", is_even));
    let extended = Classifier::new(registry);

    // The builtin prefix of the outcome list is unchanged
    let after = extended.classify(153).expect("classify after");
    assert_eq!(&after.outcomes()[..5], before.outcomes());

    // The new check appends at the end of the evaluation order
    assert_eq!(after.outcomes().len(), 6);
    let last = &after.outcomes()[5];
    assert_eq!(last.id.as_str(), "even");
    assert!(!last.matched);

    let after_even = extended.classify(28).expect("classify even value");
    assert_eq!(
        after_even.labels(),
        vec!["Happy Number", "Perfect Number", "Even Number"]
    );
}

#[test]
fn test_unknown_check_rejected_before_any_evaluation() {
    let classifier = Classifier::with_builtin_checks();

    let result = classifier.classify_with(153, &[check_id("armstrong"), check_id("no-such")]);
    match result {
        Err(ClassifyError::UnknownCheck { check_id }) => {
            assert_eq!(check_id, "no-such");
        }
        other => panic!("expected UnknownCheck, got {other:?}"),
    }
}

#[test]
fn test_classification_is_deterministic() {
    let classifier = Classifier::with_builtin_checks();

    for value in [-97, -1, 0, 1, 7, 100, 153, 8128, i64::MAX] {
        let first = classifier.classify(value).expect("first classification");
        let second = classifier.classify(value).expect("second classification");
        assert_eq!(first, second, "classification of {value} must be stable");
    }
}

#[test]
fn test_extreme_values_terminate() {
    let classifier = Classifier::with_builtin_checks();

    // The full check set completes on the boundary values of the input type
    for value in [i64::MIN, i64::MIN + 1, -1, 0, i64::MAX - 1, i64::MAX] {
        let result = classifier.classify(value).expect("classify extreme value");
        assert_eq!(result.outcomes().len(), 5);
    }
}

#[test]
fn test_report_reflects_configuration() {
    let classifier = Classifier::with_builtin_checks();
    let result = classifier.classify(7).expect("classify 7");

    let quiet = render(&result, &ReportConfig::default());
    assert_eq!(
        quiet,
        "Properties of 7:\n  - Armstrong Number\n  - Happy Number\n  - Palindrome\n  - Prime Number"
    );

    let verbose = render(
        &result,
        &ReportConfig {
            show_value: true,
            include_non_matches: true,
        },
    );
    assert!(verbose.contains("Not matched:\n  - Perfect Number"));
}

#[test]
fn test_invalid_input_never_reaches_classifier() {
    // Parsing failures are reported as input errors, not classifier panics
    assert!(parse_integer("").is_err());
    assert!(parse_integer("12.5").is_err());
    assert!(parse_integer("abc").is_err());
    assert!(parse_integer("9223372036854775808").is_err());
    assert!(extract_integer("no digits here").is_err());
}
