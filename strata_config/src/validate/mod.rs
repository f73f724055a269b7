//! Schema validation of merged configuration trees.
//!
//! Validation is one pure, depth-first pass that collects every violation it
//! finds rather than stopping at the first, so a single resolution attempt
//! reports every problem at once. The pass is ordered deterministically: at
//! each object node the node's own kind is checked, then undeclared keys in
//! sorted order (strict objects only), then declared children in sorted
//! order, with a missing-required report preceding recursion into each
//! present child. A kind mismatch never recurses into the mismatched
//! subtree.

use serde_json::{Map, Number, Value};

use crate::error::{Violation, ViolationKind, Violations};
use crate::path::FieldPath;
use crate::schema::{SchemaKind, SchemaNode, ValueKind};

/// Check a merged tree against its schema.
///
/// Requiredness is judged here, after every layer has merged: any layer may
/// satisfy a required field. Numeric bounds are enforced here only for
/// fields declared [`crate::RangePolicy::Reject`]; clamp fields pass and are
/// adjusted by the normalizer. Explicit `null` is a kind mismatch wherever a
/// kind is declared, since omission is the only way a layer expresses "no
/// opinion".
///
/// # Errors
///
/// Returns every [`Violation`] found during the single pass, in
/// deterministic order.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use strata_config::{SchemaNode, validate};
///
/// let schema = SchemaNode::object([("enabled", SchemaNode::boolean())]);
/// assert!(validate(&schema, &json!({"enabled": true})).is_ok());
/// assert!(validate(&schema, &json!({"enabled": "yes"})).is_err());
/// ```
pub fn validate(schema: &SchemaNode, tree: &Value) -> Result<(), Violations> {
    let mut found = Vec::new();
    check_node(schema, tree, &FieldPath::root(), &mut found);
    Violations::from_vec(found).map_or(Ok(()), Err)
}

fn check_node(node: &SchemaNode, value: &Value, path: &FieldPath, found: &mut Vec<Violation>) {
    match node.kind() {
        SchemaKind::Boolean => {
            if !value.is_boolean() {
                push_mismatch(node, value, path, found);
            }
        }
        SchemaKind::String { max_length, normalize } => {
            check_string(node, value, path, *max_length, normalize.is_none(), found);
        }
        SchemaKind::Number { min, max, out_of_range } => {
            check_number(
                node,
                value,
                path,
                min.as_ref(),
                max.as_ref(),
                out_of_range.is_reject(),
                found,
            );
        }
        SchemaKind::Enum { variants } => check_enum(node, value, path, variants, found),
        SchemaKind::Array { items } => check_array(node, value, path, items, found),
        SchemaKind::Object { children, open } => {
            check_object(node, value, path, children, *open, found);
        }
    }
}

fn check_string(
    node: &SchemaNode,
    value: &Value,
    path: &FieldPath,
    max_length: Option<usize>,
    enforce_length: bool,
    found: &mut Vec<Violation>,
) {
    let Some(text) = value.as_str() else {
        push_mismatch(node, value, path, found);
        return;
    };
    // Sanitized fields truncate in the normalizer instead of rejecting here.
    if enforce_length
        && let Some(limit) = max_length
        && text.chars().count() > limit
    {
        found.push(Violation::new(
            path.clone(),
            ViolationKind::TooLong { max_length: limit },
            Some(value.clone()),
        ));
    }
}

fn check_number(
    node: &SchemaNode,
    value: &Value,
    path: &FieldPath,
    min: Option<&Number>,
    max: Option<&Number>,
    reject_out_of_range: bool,
    found: &mut Vec<Violation>,
) {
    let Value::Number(number) = value else {
        push_mismatch(node, value, path, found);
        return;
    };
    if reject_out_of_range && out_of_bounds(number, min, max) {
        found.push(Violation::new(
            path.clone(),
            ViolationKind::OutOfRange {
                min: min.cloned(),
                max: max.cloned(),
            },
            Some(value.clone()),
        ));
    }
}

fn check_enum(
    node: &SchemaNode,
    value: &Value,
    path: &FieldPath,
    variants: &[String],
    found: &mut Vec<Violation>,
) {
    let Some(text) = value.as_str() else {
        push_mismatch(node, value, path, found);
        return;
    };
    if !variants.iter().any(|variant| variant == text) {
        found.push(Violation::new(
            path.clone(),
            ViolationKind::NotInEnum {
                allowed: variants.to_vec(),
            },
            Some(value.clone()),
        ));
    }
}

fn check_array(
    node: &SchemaNode,
    value: &Value,
    path: &FieldPath,
    items: &SchemaNode,
    found: &mut Vec<Violation>,
) {
    let Value::Array(elements) = value else {
        push_mismatch(node, value, path, found);
        return;
    };
    for (position, element) in elements.iter().enumerate() {
        check_node(items, element, &path.index(position), found);
    }
}

fn check_object(
    node: &SchemaNode,
    value: &Value,
    path: &FieldPath,
    children: &std::collections::BTreeMap<String, SchemaNode>,
    open: bool,
    found: &mut Vec<Violation>,
) {
    let Value::Object(map) = value else {
        push_mismatch(node, value, path, found);
        return;
    };
    if !open {
        check_undeclared(map, children, path, found);
    }
    for (name, child) in children {
        match map.get(name) {
            Some(present) => check_node(child, present, &path.child(name), found),
            None => {
                if child.is_required() {
                    found.push(Violation::new(
                        path.child(name),
                        ViolationKind::MissingRequired,
                        None,
                    ));
                }
            }
        }
    }
}

fn check_undeclared(
    map: &Map<String, Value>,
    children: &std::collections::BTreeMap<String, SchemaNode>,
    path: &FieldPath,
    found: &mut Vec<Violation>,
) {
    // Sorted explicitly so report order does not depend on serde_json's map
    // representation.
    let mut undeclared: Vec<&String> = map
        .keys()
        .filter(|key| !children.contains_key(*key))
        .collect();
    undeclared.sort();
    for key in undeclared {
        found.push(Violation::new(
            path.child(key),
            ViolationKind::UnknownField,
            map.get(key).cloned(),
        ));
    }
}

fn push_mismatch(node: &SchemaNode, value: &Value, path: &FieldPath, found: &mut Vec<Violation>) {
    found.push(Violation::new(
        path.clone(),
        ViolationKind::KindMismatch {
            expected: node.field_kind(),
            actual: ValueKind::of(value),
        },
        Some(value.clone()),
    ));
}

fn out_of_bounds(number: &Number, min: Option<&Number>, max: Option<&Number>) -> bool {
    let observed = as_bound(number);
    min.is_some_and(|low| observed < as_bound(low)) || max.is_some_and(|high| observed > as_bound(high))
}

fn as_bound(number: &Number) -> f64 {
    number.as_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests;
