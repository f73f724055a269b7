use serde_json::json;

use super::validate;
use crate::error::{Violation, ViolationKind};
use crate::schema::{FieldKind, SchemaNode, ValueKind};

fn sample_schema() -> SchemaNode {
    SchemaNode::object([
        (
            "logging",
            SchemaNode::object([("enabled", SchemaNode::boolean())]),
        ),
        (
            "capacity",
            SchemaNode::object([
                ("min", SchemaNode::number().min(1u64).max(100u64).required()),
                ("max", SchemaNode::number().min(1u64).max(100u64).required()),
            ]),
        ),
        (
            "priceClass",
            SchemaNode::enumeration(["PriceClass_100", "PriceClass_200", "PriceClass_All"]),
        ),
        (
            "rules",
            SchemaNode::array(SchemaNode::object([(
                "name",
                SchemaNode::string().required(),
            )])),
        ),
        ("metadata", SchemaNode::object::<&str, _>([]).open()),
    ])
}

fn violations_of(schema: &SchemaNode, tree: &serde_json::Value) -> Vec<Violation> {
    validate(schema, tree).map_or_else(|violations| violations.into_iter().collect(), |()| Vec::new())
}

#[test]
fn valid_tree_passes() {
    let tree = json!({
        "logging": {"enabled": true},
        "capacity": {"min": 1, "max": 10},
        "priceClass": "PriceClass_200",
        "rules": [{"name": "allow-https"}],
        "metadata": {"anything": "goes", "here": 1},
    });
    assert!(validate(&sample_schema(), &tree).is_ok());
}

#[test]
fn wrong_scalar_kind_is_reported_with_path_and_value() {
    let found = violations_of(
        &sample_schema(),
        &json!({"logging": {"enabled": "yes"}}),
    );
    assert_eq!(found.len(), 1);
    assert!(found.iter().any(|violation| {
        violation.path().to_string() == "logging.enabled"
            && matches!(
                violation.kind(),
                ViolationKind::KindMismatch {
                    expected: FieldKind::Boolean,
                    actual: ValueKind::String,
                }
            )
            && violation.value() == Some(&json!("yes"))
    }));
}

#[test]
fn unknown_field_in_strict_object_is_rejected() {
    let found = violations_of(
        &sample_schema(),
        &json!({"loging": {"enabled": true}}),
    );
    assert_eq!(found.len(), 1);
    assert!(found.iter().any(|violation| {
        violation.path().to_string() == "loging"
            && matches!(violation.kind(), ViolationKind::UnknownField)
    }));
}

#[test]
fn open_objects_accept_undeclared_keys() {
    let tree = json!({"metadata": {"team": "search", "cost-centre": 42}});
    assert!(validate(&sample_schema(), &tree).is_ok());
}

#[test]
fn missing_required_is_judged_after_the_full_merge() {
    let found = violations_of(&sample_schema(), &json!({"capacity": {"min": 3}}));
    assert_eq!(found.len(), 1);
    assert!(found.iter().any(|violation| {
        violation.path().to_string() == "capacity.max"
            && matches!(violation.kind(), ViolationKind::MissingRequired)
    }));
}

#[test]
fn enum_rejects_values_outside_the_variant_set() {
    let found = violations_of(&sample_schema(), &json!({"priceClass": "PriceClass_500"}));
    assert!(found.iter().any(|violation| {
        matches!(
            violation.kind(),
            ViolationKind::NotInEnum { allowed } if allowed.len() == 3
        )
    }));
}

#[test]
fn reject_policy_bounds_fail_validation() {
    let found = violations_of(
        &sample_schema(),
        &json!({"capacity": {"min": 0, "max": 1000}}),
    );
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|violation| {
        matches!(violation.kind(), ViolationKind::OutOfRange { .. })
    }));
}

#[test]
fn clamp_policy_bounds_pass_validation() {
    let schema = SchemaNode::object([(
        "retention",
        SchemaNode::number().min(1u64).max(365u64).clamped(),
    )]);
    assert!(validate(&schema, &json!({"retention": 9000})).is_ok());
}

#[test]
fn too_long_plain_strings_fail_while_sanitized_ones_pass() {
    let strict = SchemaNode::object([("name", SchemaNode::string().max_length(4))]);
    let found = violations_of(&strict, &json!({"name": "overlong"}));
    assert!(found.iter().any(|violation| {
        matches!(violation.kind(), ViolationKind::TooLong { max_length: 4 })
    }));

    let sanitized = SchemaNode::object([(
        "name",
        SchemaNode::string().max_length(4).resource_name(),
    )]);
    assert!(validate(&sanitized, &json!({"name": "overlong"})).is_ok());
}

#[test]
fn null_is_a_kind_mismatch_wherever_a_kind_is_declared() {
    let found = violations_of(&sample_schema(), &json!({"priceClass": null}));
    assert!(found.iter().any(|violation| {
        matches!(
            violation.kind(),
            ViolationKind::KindMismatch {
                actual: ValueKind::Null,
                ..
            }
        )
    }));
}

#[test]
fn array_elements_are_validated_with_indexed_paths() {
    let found = violations_of(
        &sample_schema(),
        &json!({"rules": [{"name": "ok"}, {"name": 7}, {}]}),
    );
    let paths: Vec<String> = found
        .iter()
        .map(|violation| violation.path().to_string())
        .collect();
    assert_eq!(paths, vec!["rules[1].name".to_owned(), "rules[2].name".to_owned()]);
}

#[test]
fn non_object_root_is_a_root_kind_mismatch() {
    let found = violations_of(&sample_schema(), &json!("scalar"));
    assert_eq!(found.len(), 1);
    assert!(found.iter().any(|violation| {
        violation.path().is_root()
            && matches!(
                violation.kind(),
                ViolationKind::KindMismatch {
                    expected: FieldKind::Object,
                    actual: ValueKind::String,
                }
            )
    }));
}

#[test]
fn kind_mismatch_does_not_recurse_into_the_subtree() {
    let found = violations_of(&sample_schema(), &json!({"capacity": [1, 2]}));
    assert_eq!(found.len(), 1);
    assert!(found.iter().any(|violation| {
        violation.path().to_string() == "capacity"
            && matches!(
                violation.kind(),
                ViolationKind::KindMismatch {
                    expected: FieldKind::Object,
                    actual: ValueKind::Array,
                }
            )
    }));
}

#[test]
fn all_violations_arrive_together_in_deterministic_order() {
    let tree = json!({
        "zzz": true,
        "aaa": 1,
        "logging": {"enabled": "yes"},
        "capacity": {"min": 3},
    });
    let first = violations_of(&sample_schema(), &tree);
    let second = violations_of(&sample_schema(), &tree);
    assert_eq!(first, second);

    let paths: Vec<String> = first
        .iter()
        .map(|violation| violation.path().to_string())
        .collect();
    // Undeclared keys sorted first, then declared children in sorted order.
    assert_eq!(
        paths,
        vec![
            "aaa".to_owned(),
            "zzz".to_owned(),
            "capacity.max".to_owned(),
            "logging.enabled".to_owned(),
        ]
    );
}
