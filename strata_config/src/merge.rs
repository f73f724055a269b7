//! Deterministic merge of ranked configuration layers.
//!
//! Merging is pure data transformation and never fails; all failure
//! detection belongs to the validation stage. Every component gets the same
//! precedence and array semantics from this one fold, instead of per-builder
//! ad hoc spreading.

use serde_json::{Map, Value};

use crate::layer::ConfigLayer;

/// Overlay `layer` onto `target`, updating `target` in place.
///
/// Behaviour:
/// - Objects merge key-by-key: keys absent from `layer` keep the target's
///   value, keys present in both recurse, keys only in `layer` are added.
/// - Arrays and scalars replace `target` wholesale. Partial list merging
///   would give ambiguous ordering for lists such as ingress rules, so a
///   higher layer owning a list owns all of it.
/// - When merging an object into a non-object target, the target is reset
///   to `{}` first.
/// - Explicit `null` is a defined value and overwrites; a layer with no
///   opinion about a field must omit the key entirely.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use strata_config::merge_value;
///
/// let mut acc = json!({"capacity": {"min": 2, "max": 10}});
/// merge_value(&mut acc, json!({"capacity": {"min": 1}}));
/// assert_eq!(acc, json!({"capacity": {"min": 1, "max": 10}}));
///
/// // Arrays replace wholesale.
/// merge_value(&mut acc, json!({"rules": [1, 2]}));
/// merge_value(&mut acc, json!({"rules": [3]}));
/// assert_eq!(acc.get("rules"), Some(&json!([3])));
/// ```
pub fn merge_value(target: &mut Value, layer: Value) {
    match layer {
        Value::Object(map) => merge_object(target, map),
        _ => *target = layer,
    }
}

fn merge_object(target: &mut Value, map: Map<String, Value>) {
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }

    let Some(target_map) = target.as_object_mut() else {
        return;
    };

    for (key, value) in map {
        match target_map.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target_map.insert(key, value);
            }
        }
    }
}

/// Fold configuration layers, supplied in ascending rank order, into one
/// merged tree.
///
/// The fold starts from an empty object and applies [`merge_value`] left to
/// right, so a later (higher-rank) layer wins every scalar and array
/// conflict. Callers obtain ascending order from
/// [`crate::LayerStack::into_ordered`]; an unordered iterator still merges,
/// with the later element winning, which is also the documented behaviour
/// for layers of equal rank.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use strata_config::{LayerStack, merge_layers};
///
/// let mut stack = LayerStack::new();
/// stack.push_fallback(json!({"priceClass": "PriceClass_100"}));
/// stack.push_compliance(json!({"priceClass": "PriceClass_All"}));
/// let merged = merge_layers(stack.into_ordered());
/// assert_eq!(merged, json!({"priceClass": "PriceClass_All"}));
/// ```
#[must_use]
pub fn merge_layers<'a>(layers: impl IntoIterator<Item = ConfigLayer<'a>>) -> Value {
    let mut merged = Value::Object(Map::new());
    for layer in layers {
        merge_value(&mut merged, layer.into_value());
    }
    merged
}
