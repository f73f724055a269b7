//! Post-validation normalization of merged configuration trees.
//!
//! Normalization runs only on trees that already passed validation, in a
//! fixed order: schema defaults fill absent optional fields, the component's
//! derive hook computes dependent fields, clamp-policy numbers are forced
//! into bounds, and resource-name strings are sanitized. The whole pass is
//! idempotent: normalizing an already-normalized tree changes nothing, which
//! also means resolver output stays stable if it is ever resolved again.

mod sanitize;

use serde_json::{Number, Value};

use crate::context::ResolutionContext;
use crate::error::StrataResult;
use crate::path::FieldPath;
use crate::schema::{SchemaKind, SchemaNode, TextNormalization};

/// Normalize a validated tree in place.
///
/// `derive` is the component's hook for computed fields (for example a
/// resource name derived from `service-component`, or a dependent sub-object
/// expanded behind a feature flag). It runs after defaults fill and before
/// clamping and sanitization, so derived values are themselves subject to
/// the per-field policies. Hooks must be idempotent and must keep the tree
/// schema-valid.
///
/// # Errors
///
/// Propagates the hook's [`crate::StrataError`]; the defaults, clamping, and
/// sanitization steps themselves cannot fail.
pub fn normalize<F>(
    schema: &SchemaNode,
    tree: &mut Value,
    context: &ResolutionContext,
    derive: F,
) -> StrataResult<()>
where
    F: FnOnce(&mut Value, &ResolutionContext) -> StrataResult<()>,
{
    apply_defaults(schema, tree);
    derive(tree, context)?;
    apply_field_policies(schema, tree, &FieldPath::root());
    Ok(())
}

/// Fill absent optional fields with their schema-declared defaults.
///
/// Newly inserted object defaults are descended so nested defaults apply.
/// An absent optional object without a default stays absent; give it a `{}`
/// default to force its children's defaults.
fn apply_defaults(node: &SchemaNode, value: &mut Value) {
    match node.kind() {
        SchemaKind::Object { children, .. } => {
            let Some(map) = value.as_object_mut() else {
                return;
            };
            for (name, child) in children {
                if !map.contains_key(name)
                    && let Some(default) = child.default()
                {
                    map.insert(name.clone(), default.clone());
                }
                if let Some(present) = map.get_mut(name) {
                    apply_defaults(child, present);
                }
            }
        }
        SchemaKind::Array { items } => {
            let Some(elements) = value.as_array_mut() else {
                return;
            };
            for element in elements {
                apply_defaults(items, element);
            }
        }
        SchemaKind::Boolean
        | SchemaKind::String { .. }
        | SchemaKind::Number { .. }
        | SchemaKind::Enum { .. } => {}
    }
}

/// Apply per-field clamp and sanitization policies declared in the schema.
fn apply_field_policies(node: &SchemaNode, value: &mut Value, path: &FieldPath) {
    match node.kind() {
        SchemaKind::Number { min, max, out_of_range } if !out_of_range.is_reject() => {
            clamp_number(value, min.as_ref(), max.as_ref(), path);
        }
        SchemaKind::String {
            max_length,
            normalize: TextNormalization::ResourceName,
        } => {
            sanitize_string(value, *max_length, path);
        }
        SchemaKind::Object { children, .. } => {
            let Some(map) = value.as_object_mut() else {
                return;
            };
            for (name, child) in children {
                if let Some(present) = map.get_mut(name) {
                    apply_field_policies(child, present, &path.child(name));
                }
            }
        }
        SchemaKind::Array { items } => {
            let Some(elements) = value.as_array_mut() else {
                return;
            };
            for (position, element) in elements.iter_mut().enumerate() {
                apply_field_policies(items, element, &path.index(position));
            }
        }
        SchemaKind::Boolean
        | SchemaKind::String { .. }
        | SchemaKind::Number { .. }
        | SchemaKind::Enum { .. } => {}
    }
}

fn clamp_number(value: &mut Value, min: Option<&Number>, max: Option<&Number>, path: &FieldPath) {
    let Value::Number(observed) = &*value else {
        return;
    };
    let Some(bound) = clamped_replacement(observed, min, max) else {
        return;
    };
    tracing::info!(
        field = %path,
        from = %observed,
        to = %bound,
        "clamped out-of-range value into declared bounds"
    );
    *value = Value::Number(bound);
}

// Writing the bound's own Number preserves its integer-ness instead of
// round-tripping through a float.
fn clamped_replacement(
    observed: &Number,
    min: Option<&Number>,
    max: Option<&Number>,
) -> Option<Number> {
    let reading = observed.as_f64().unwrap_or(f64::NAN);
    if let Some(low) = min
        && reading < low.as_f64().unwrap_or(f64::NAN)
    {
        return Some(low.clone());
    }
    if let Some(high) = max
        && reading > high.as_f64().unwrap_or(f64::NAN)
    {
        return Some(high.clone());
    }
    None
}

fn sanitize_string(value: &mut Value, max_length: Option<usize>, path: &FieldPath) {
    let Some(text) = value.as_str() else {
        return;
    };
    let original = text.to_owned();
    let sanitized = sanitize::resource_name(&original, max_length);
    if sanitized == original {
        return;
    }
    tracing::debug!(
        field = %path,
        from = %original,
        to = %sanitized,
        "sanitized free-text value into a resource name"
    );
    *value = Value::String(sanitized);
}
