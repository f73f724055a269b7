//! The seam a component implements once to join the resolution pipeline.

use serde_json::{Map, Value};

use crate::compliance::ComplianceFramework;
use crate::context::ResolutionContext;
use crate::error::StrataResult;
use crate::schema::SchemaNode;

use super::{ResolvedConfiguration, resolve};

/// Per-component description of a configuration surface.
///
/// A component type implements this trait once, replacing the repeated
/// per-component switch blocks and hand-rolled deep merges with data the
/// shared pipeline consumes: a schema, a fallback layer, a
/// compliance-defaults layer per framework, and an optional derive hook.
///
/// # Examples
///
/// ```rust
/// use serde_json::{Value, json};
/// use strata_config::{
///     ComplianceFramework, ComponentModel, ResolutionContext, SchemaNode,
/// };
///
/// struct Distribution {
///     schema: SchemaNode,
/// }
///
/// impl Distribution {
///     fn new() -> Self {
///         Self {
///             schema: SchemaNode::object([(
///                 "priceClass",
///                 SchemaNode::enumeration([
///                     "PriceClass_100", "PriceClass_200", "PriceClass_All",
///                 ]),
///             )]),
///         }
///     }
/// }
///
/// impl ComponentModel for Distribution {
///     fn name(&self) -> &str {
///         "distribution"
///     }
///
///     fn schema(&self) -> &SchemaNode {
///         &self.schema
///     }
///
///     fn fallback(&self) -> Value {
///         json!({"priceClass": "PriceClass_100"})
///     }
///
///     fn compliance_defaults(&self, framework: ComplianceFramework) -> Value {
///         match framework {
///             ComplianceFramework::Commercial => json!({}),
///             ComplianceFramework::FedrampModerate | ComplianceFramework::FedrampHigh => {
///                 json!({"priceClass": "PriceClass_All"})
///             }
///         }
///     }
/// }
///
/// let context = ResolutionContext::new(ComplianceFramework::FedrampHigh, "cdn", "site");
/// let resolved = Distribution::new().resolve(&context, json!({}))?;
/// assert_eq!(resolved.tree().get("priceClass"), Some(&json!("PriceClass_All")));
/// # Ok::<_, strata_config::StrataError>(())
/// ```
pub trait ComponentModel {
    /// Component type name used in diagnostics and error reports.
    fn name(&self) -> &str;

    /// The immutable schema describing this component's configuration.
    fn schema(&self) -> &SchemaNode;

    /// Hardcoded fallback values (rank 0). Defaults to an empty layer.
    fn fallback(&self) -> Value {
        Value::Object(Map::new())
    }

    /// Hardening defaults for `framework` (rank 1). Defaults to an empty
    /// layer for components with no compliance-sensitive fields.
    fn compliance_defaults(&self, _framework: ComplianceFramework) -> Value {
        Value::Object(Map::new())
    }

    /// Derive computed fields on the merged, defaulted tree.
    ///
    /// Runs inside normalization, before clamping and sanitization. Hooks
    /// must be idempotent and must keep the tree schema-valid; returning an
    /// error aborts the resolution.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::StrataError`] (typically
    /// [`crate::StrataError::Derivation`]) when the tree cannot be completed.
    fn derive(&self, _tree: &mut Value, _context: &ResolutionContext) -> StrataResult<()> {
        Ok(())
    }

    /// Resolve one configuration for this component under `context`, with
    /// `overrides` as the manifest-author layer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StrataError::InvalidSchema`] when the schema fails
    /// startup verification, [`crate::StrataError::Validation`] carrying
    /// every violation when the merged tree breaches the schema, or the
    /// derive hook's error.
    fn resolve(
        &self,
        context: &ResolutionContext,
        overrides: Value,
    ) -> StrataResult<ResolvedConfiguration>
    where
        Self: Sized,
    {
        resolve(self, context, overrides)
    }
}
