//! Orchestration of the resolution pipeline.

mod model;
mod resolved;

pub use model::ComponentModel;
pub use resolved::ResolvedConfiguration;

use serde_json::Value;

use crate::context::ResolutionContext;
use crate::error::{StrataError, StrataResult};
use crate::layer::LayerStack;
use crate::merge::merge_layers;
use crate::normalize::normalize;
use crate::validate::validate;

/// Resolve one component configuration: gather the five layers in rank
/// order, merge, validate, normalize.
///
/// Resolution is all-or-nothing: validation failure aborts before any
/// normalization and surfaces every violation from the single pass
/// together. The function is pure given its inputs and holds no shared
/// state, so many component instances may resolve concurrently without
/// coordination.
///
/// # Errors
///
/// Returns [`StrataError::InvalidSchema`] when the component's schema fails
/// verification, [`StrataError::Validation`] with the full violation list
/// when the merged tree breaches the schema, or the component's derive hook
/// error.
pub fn resolve<M: ComponentModel + ?Sized>(
    model: &M,
    context: &ResolutionContext,
    overrides: Value,
) -> StrataResult<ResolvedConfiguration> {
    let schema = model.schema();
    schema.verify().map_err(|defects| StrataError::InvalidSchema {
        component: model.name().to_owned(),
        detail: defects.join("; "),
    })?;

    let mut stack = LayerStack::with_capacity(5);
    stack.push_fallback(model.fallback());
    stack.push_compliance(model.compliance_defaults(context.framework()));
    if let Some(value) = context.environment_defaults() {
        stack.push_environment(
            value.clone(),
            context.environment_origin().map(std::borrow::ToOwned::to_owned),
        );
    }
    stack.push_manifest(overrides, None);
    if let Some(value) = context.policy_overrides() {
        stack.push_policy(
            value.clone(),
            context.policy_origin().map(std::borrow::ToOwned::to_owned),
        );
    }

    let mut merged = merge_layers(stack.into_ordered());
    validate(schema, &merged).map_err(|violations| StrataError::Validation {
        component: model.name().to_owned(),
        violations,
    })?;
    normalize(schema, &mut merged, context, |tree, ctx| {
        model.derive(tree, ctx)
    })?;

    Ok(ResolvedConfiguration::new(
        model.name().to_owned(),
        context.framework(),
        merged,
    ))
}
