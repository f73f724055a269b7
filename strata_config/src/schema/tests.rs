use serde_json::json;

use super::SchemaNode;
use crate::schema::FieldKind;

fn defects_of(node: &SchemaNode) -> Vec<String> {
    node.verify().err().unwrap_or_default()
}

#[test]
fn well_formed_schema_verifies() {
    let schema = SchemaNode::object([
        ("enabled", SchemaNode::boolean().default_value(json!(false))),
        (
            "capacity",
            SchemaNode::object([
                ("min", SchemaNode::number().min(1u64).max(10u64).required()),
                ("max", SchemaNode::number().min(1u64).max(10u64).required()),
            ])
            .required(),
        ),
        (
            "priceClass",
            SchemaNode::enumeration(["PriceClass_100", "PriceClass_All"])
                .default_value(json!("PriceClass_100")),
        ),
        (
            "tags",
            SchemaNode::array(SchemaNode::string().max_length(64)),
        ),
        ("extras", SchemaNode::object::<&str, _>([]).open()),
    ]);
    assert_eq!(schema.verify(), Ok(()));
}

#[test]
fn field_kinds_report_flat_names() {
    assert_eq!(SchemaNode::boolean().field_kind(), FieldKind::Boolean);
    assert_eq!(SchemaNode::string().field_kind(), FieldKind::String);
    assert_eq!(SchemaNode::number().field_kind(), FieldKind::Number);
    assert_eq!(
        SchemaNode::enumeration(["a"]).field_kind(),
        FieldKind::Enum
    );
    assert_eq!(
        SchemaNode::array(SchemaNode::string()).field_kind(),
        FieldKind::Array
    );
    assert_eq!(
        SchemaNode::object::<&str, _>([]).field_kind(),
        FieldKind::Object
    );
}

#[test]
fn inverted_bounds_are_a_defect() {
    let schema = SchemaNode::object([("count", SchemaNode::number().min(10u64).max(2u64))]);
    let defects = defects_of(&schema);
    assert_eq!(defects.len(), 1);
    assert!(defects.iter().any(|d| d.contains("count")
        && d.contains("minimum bound 10 exceeds maximum 2")));
}

#[test]
fn empty_and_duplicated_enums_are_defects() {
    let empty = SchemaNode::object([("kind", SchemaNode::enumeration(Vec::<String>::new()))]);
    assert!(defects_of(&empty).iter().any(|d| d.contains("enum with no variants")));

    let duplicated =
        SchemaNode::object([("kind", SchemaNode::enumeration(["a", "b", "a"]))]);
    assert!(
        defects_of(&duplicated)
            .iter()
            .any(|d| d.contains("duplicate enum variant 'a'"))
    );
}

#[test]
fn default_violating_its_own_node_is_a_defect() {
    let schema = SchemaNode::object([(
        "retention",
        SchemaNode::number().min(1u64).max(365u64).default_value(json!("soon")),
    )]);
    assert!(defects_of(&schema).iter().any(|d| {
        d.contains("retention") && d.contains("default literal is invalid")
    }));
}

#[test]
fn required_with_default_is_a_defect() {
    let schema = SchemaNode::object([(
        "name",
        SchemaNode::string().required().default_value(json!("fallback")),
    )]);
    assert!(
        defects_of(&schema)
            .iter()
            .any(|d| d.contains("required combined with a default"))
    );
}

#[test]
fn builder_misuse_is_collected_not_panicked() {
    let schema = SchemaNode::object([
        ("flag", SchemaNode::boolean().min(1u64)),
        ("name", SchemaNode::string().clamped()),
        ("count", SchemaNode::number().open()),
    ]);
    let defects = defects_of(&schema);
    assert_eq!(defects.len(), 3);
    assert!(defects.iter().any(|d| d.contains("flag") && d.contains("numeric bound")));
    assert!(defects.iter().any(|d| d.contains("name") && d.contains("clamp policy")));
    assert!(defects.iter().any(|d| d.contains("count") && d.contains("open-object marker")));
}

#[test]
fn clamp_without_bounds_is_a_defect() {
    let clamped = SchemaNode::number().clamped();
    assert!(
        defects_of(&clamped)
            .iter()
            .any(|d| d.contains("clamp policy declared without bounds"))
    );
}

#[test]
fn every_defect_is_reported_together() {
    let schema = SchemaNode::object([
        ("count", SchemaNode::number().min(10u64).max(2u64)),
        ("kind", SchemaNode::enumeration(Vec::<String>::new())),
        (
            "name",
            SchemaNode::string().required().default_value(json!("x")),
        ),
    ]);
    assert_eq!(defects_of(&schema).len(), 3);
}

#[test]
fn schema_documents_round_trip_through_serde() {
    let schema = SchemaNode::object([
        (
            "domainName",
            SchemaNode::string().max_length(28).resource_name(),
        ),
        (
            "retention",
            SchemaNode::number().min(1u64).max(365u64).clamped(),
        ),
        (
            "priceClass",
            SchemaNode::enumeration(["PriceClass_100", "PriceClass_All"]),
        ),
        (
            "rules",
            SchemaNode::array(SchemaNode::object([(
                "name",
                SchemaNode::string().required(),
            )])),
        ),
    ]);
    let document = serde_json::to_value(&schema).unwrap_or_default();
    let reparsed: Result<SchemaNode, _> = serde_json::from_value(document.clone());
    assert_eq!(reparsed.ok(), Some(schema));
    assert_eq!(document.get("kind"), Some(&json!("object")));
}

#[test]
fn schema_documents_parse_from_declarative_json() {
    let document = json!({
        "kind": "object",
        "children": {
            "enabled": {"kind": "boolean", "default": true},
            "priceClass": {
                "kind": "enum",
                "variants": ["PriceClass_100", "PriceClass_All"]
            },
            "retention": {
                "kind": "number",
                "min": 1,
                "max": 365,
                "out_of_range": "clamp"
            }
        }
    });
    let parsed: Result<SchemaNode, _> = serde_json::from_value(document);
    assert!(parsed.is_ok(), "schema document should parse");
    let schema = parsed.unwrap_or_else(|_| SchemaNode::boolean());
    assert_eq!(schema.verify(), Ok(()));
    assert_eq!(schema.field_kind(), FieldKind::Object);
}
