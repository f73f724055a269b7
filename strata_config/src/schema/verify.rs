//! Startup verification of schema trees.
//!
//! Components define schemas once, statically; defects in them are
//! programming errors, not user configuration errors. Verification walks the
//! tree before first use and reports every defect together, so a broken
//! schema never silently accepts or rejects configurations.

use std::collections::BTreeSet;

use serde_json::Number;

use crate::path::FieldPath;
use crate::validate::validate;

use super::{SchemaKind, SchemaNode};

impl SchemaNode {
    /// Check the schema tree itself before first use.
    ///
    /// Collects every defect rather than stopping at the first: misused
    /// builder refinements, inverted numeric bounds, empty or duplicated
    /// enum variant sets, defaults that violate their own node, and
    /// `required` combined with a default (a defaulted field is always
    /// satisfiable, so the flag would be dead).
    ///
    /// # Errors
    ///
    /// Returns the full list of defect descriptions when the tree is
    /// defective.
    pub fn verify(&self) -> Result<(), Vec<String>> {
        let mut defects = Vec::new();
        collect_defects(self, &FieldPath::root(), &mut defects);
        if defects.is_empty() {
            Ok(())
        } else {
            Err(defects)
        }
    }
}

fn collect_defects(node: &SchemaNode, path: &FieldPath, defects: &mut Vec<String>) {
    for misuse in node.misuse() {
        defects.push(format!("{path}: {misuse}"));
    }
    if node.is_required() && node.default().is_some() {
        defects.push(format!(
            "{path}: required combined with a default; a defaulted field is always satisfied"
        ));
    }
    check_kind(node, path, defects);
    check_default(node, path, defects);
}

fn check_kind(node: &SchemaNode, path: &FieldPath, defects: &mut Vec<String>) {
    match node.kind() {
        SchemaKind::Number {
            min,
            max,
            out_of_range,
        } => {
            if let (Some(low), Some(high)) = (min.as_ref(), max.as_ref())
                && bound_of(low) > bound_of(high)
            {
                defects.push(format!("{path}: minimum bound {low} exceeds maximum {high}"));
            }
            if !out_of_range.is_reject() && min.is_none() && max.is_none() {
                defects.push(format!("{path}: clamp policy declared without bounds"));
            }
        }
        SchemaKind::Enum { variants } => check_variants(variants, path, defects),
        SchemaKind::Array { items } => collect_defects(items, &path.child("[]"), defects),
        SchemaKind::Object { children, .. } => {
            for (name, child) in children {
                collect_defects(child, &path.child(name), defects);
            }
        }
        SchemaKind::Boolean | SchemaKind::String { .. } => {}
    }
}

fn check_variants(variants: &[String], path: &FieldPath, defects: &mut Vec<String>) {
    if variants.is_empty() {
        defects.push(format!("{path}: enum with no variants"));
        return;
    }
    let mut seen = BTreeSet::new();
    for variant in variants {
        if !seen.insert(variant) {
            defects.push(format!("{path}: duplicate enum variant '{variant}'"));
        }
    }
}

// A node's default must satisfy the node's own constraints, so the
// normalizer can fill it in without re-validating.
fn check_default(node: &SchemaNode, path: &FieldPath, defects: &mut Vec<String>) {
    let Some(default) = node.default() else {
        return;
    };
    if let Err(violations) = validate(node, default) {
        for violation in &violations {
            defects.push(format!("{path}: default literal is invalid: {violation}"));
        }
    }
}

fn bound_of(number: &Number) -> f64 {
    number.as_f64().unwrap_or(f64::NAN)
}
