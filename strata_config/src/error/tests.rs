use serde_json::json;

use super::{StrataError, Violation, ViolationKind, Violations};
use crate::path::FieldPath;
use crate::schema::{FieldKind, ValueKind};

fn mismatch_at(path: FieldPath) -> Violation {
    Violation::new(
        path,
        ViolationKind::KindMismatch {
            expected: FieldKind::Boolean,
            actual: ValueKind::String,
        },
        Some(json!("yes")),
    )
}

#[test]
fn violation_display_names_path_constraint_and_value() {
    let violation = mismatch_at(FieldPath::root().child("logging").child("enabled"));
    assert_eq!(
        violation.to_string(),
        "logging.enabled: expected boolean, found string (got \"yes\")"
    );
}

#[test]
fn missing_required_displays_without_a_value() {
    let violation = Violation::new(
        FieldPath::root().child("capacity"),
        ViolationKind::MissingRequired,
        None,
    );
    assert_eq!(violation.to_string(), "capacity: required field missing");
    assert!(violation.value().is_none());
}

#[test]
fn enum_and_range_kinds_render_their_constraints() {
    let not_in_enum = ViolationKind::NotInEnum {
        allowed: vec!["PriceClass_100".to_owned(), "PriceClass_All".to_owned()],
    };
    assert_eq!(
        not_in_enum.to_string(),
        "not one of [PriceClass_100, PriceClass_All]"
    );

    let out_of_range = ViolationKind::OutOfRange {
        min: Some(1.into()),
        max: Some(365.into()),
    };
    assert_eq!(out_of_range.to_string(), "out of range [1, 365]");

    let unbounded_above = ViolationKind::OutOfRange {
        min: Some(1.into()),
        max: None,
    };
    assert_eq!(unbounded_above.to_string(), "out of range [1, ..]");

    let too_long = ViolationKind::TooLong { max_length: 28 };
    assert_eq!(too_long.to_string(), "longer than 28 characters");
}

#[test]
fn violations_from_an_empty_pass_are_none() {
    assert!(Violations::from_vec(Vec::new()).is_none());
}

#[test]
fn violations_display_numbered_in_report_order() {
    let violations = Violations::from_vec(vec![
        mismatch_at(FieldPath::root().child("a")),
        Violation::new(
            FieldPath::root().child("b"),
            ViolationKind::UnknownField,
            Some(json!(1)),
        ),
    ])
    .unwrap_or_default();
    assert_eq!(violations.len(), 2);
    assert!(!violations.is_empty());
    assert_eq!(
        violations.to_string(),
        "1: a: expected boolean, found string (got \"yes\")\n2: b: unknown field (got 1)"
    );
}

#[test]
fn violations_iterate_borrowed_and_owned() {
    let violations = Violations::from_vec(vec![
        mismatch_at(FieldPath::root().child("first")),
        mismatch_at(FieldPath::root().child("second")),
    ])
    .unwrap_or_default();
    let borrowed: Vec<String> = (&violations)
        .into_iter()
        .map(|violation| violation.path().to_string())
        .collect();
    assert_eq!(borrowed, vec!["first".to_owned(), "second".to_owned()]);

    let owned: Vec<Violation> = violations.into_iter().collect();
    assert_eq!(owned.len(), 2);
}

#[test]
fn validation_error_embeds_the_full_violation_list() {
    let violations = Violations::from_vec(vec![mismatch_at(
        FieldPath::root().child("logging").child("enabled"),
    )])
    .unwrap_or_default();
    let error = StrataError::Validation {
        component: "distribution".to_owned(),
        violations,
    };
    let rendered = error.to_string();
    assert!(rendered.contains("configuration for component 'distribution' is invalid"));
    assert!(rendered.contains("logging.enabled: expected boolean, found string"));
}

#[test]
fn derivation_constructor_builds_the_variant() {
    let error = StrataError::derivation("search-domain", "dedicated master needs three nodes");
    assert!(matches!(
        error,
        StrataError::Derivation { component, detail }
            if component == "search-domain" && detail == "dedicated master needs three nodes"
    ));
}

#[test]
fn extraction_failures_convert_from_serde_json() {
    let underlying =
        serde_json::from_value::<u32>(json!("text")).map_err(StrataError::from);
    assert!(matches!(underlying, Err(StrataError::Extract { .. })));
}
