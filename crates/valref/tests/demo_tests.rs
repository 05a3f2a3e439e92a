//! End-to-end tests for the tour

use pretty_assertions::assert_eq;
use valref::*;

const EXPECTED_LINES: &[&str] = &[
    "These two integers are equal",
    "These two people are not equal",
    "x = 5",
    "y = 6",
    "p1.age = 23",
    "p2.age = 23",
    "These two points' x values are not equal",
    "point1.x = 3",
    "These two points are equal",
    "These two points (original and copy with x = 4) are not equal",
    "point1R = Point2DRecord { x = 3, y = 5 }",
    "weatherS.temp_c = 25",
    "weatherS.loc.name = New Dehli",
    "These two weather values' locations are equal",
    "These two weather objects are not equal",
    "These two weather records are equal",
    "These two weather records over different locations are not equal",
];

#[test]
fn test_report_verifies() {
    let report = run(&DemoContext::new());
    assert!(report.verify().is_ok());
    assert!(report.findings().all(Finding::holds));
}

#[test]
fn test_text_lines_in_order() {
    let report = run(&DemoContext::new());
    let text = report.render(OutputFormat::Text).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, EXPECTED_LINES);
}

#[test]
fn test_core_scenario() {
    let report = run(&DemoContext::new());

    let people = report.step("reference_equality").unwrap();
    assert_eq!(people.findings[0].line(), "These two people are not equal");

    let points = report.step("value_copy").unwrap();
    assert!(points
        .findings
        .iter()
        .any(|f| f.line() == "point1.x = 3"));

    let records = report.step("record_equality").unwrap();
    assert_eq!(records.findings[0].line(), "These two points are equal");
}

#[test]
fn test_json_round_trip_preserves_outcomes() {
    let report = run(&DemoContext::with_format(OutputFormat::Json));
    let json = report.render(OutputFormat::Json).unwrap();

    let parsed: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
    assert!(parsed.verify().is_ok());
}

#[test]
fn test_json_shape() {
    let report = run(&DemoContext::new());
    let json = report.render(OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let first = &value["steps"][1]["findings"][0];
    assert_eq!(first["kind"], "comparison");
    assert_eq!(first["subject"], "people");
    assert_eq!(first["semantics"], "shared_by_handle");
    assert_eq!(first["expected"], "not_equal");
    assert_eq!(first["observed"], "not_equal");

    let scalar = &value["steps"][0]["findings"][0];
    assert!(scalar["semantics"].is_null());
}

#[test]
fn test_tampered_report_fails_verification() {
    let mut report = run(&DemoContext::new());
    report.steps[2].findings[0] = Finding::observation("x", 5, 6);

    let err = report.verify().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Contract violation in scalar_copy: x expected 5, observed 6"
    );
}
