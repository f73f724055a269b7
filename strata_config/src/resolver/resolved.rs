//! The final configuration object handed to resource-wiring code.

use serde_json::Value;

use crate::compliance::ComplianceFramework;
use crate::error::StrataResult;

/// A fully resolved component configuration.
///
/// Every required field is present, every field satisfies its declared
/// constraint, and normalization has run; resource-wiring code consuming
/// this value performs no further defaulting, validation, or null-checking.
/// The value is immutable and owned by the component instance it was
/// resolved for.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfiguration {
    component: String,
    framework: ComplianceFramework,
    tree: Value,
}

impl ResolvedConfiguration {
    pub(crate) const fn new(
        component: String,
        framework: ComplianceFramework,
        tree: Value,
    ) -> Self {
        Self {
            component,
            framework,
            tree,
        }
    }

    /// Name of the component type this configuration resolves.
    #[must_use]
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Compliance framework the configuration was resolved under.
    #[must_use]
    pub const fn framework(&self) -> ComplianceFramework {
        self.framework
    }

    /// The resolved configuration tree.
    #[must_use]
    pub const fn tree(&self) -> &Value {
        &self.tree
    }

    /// Consume the configuration, returning the tree.
    #[must_use]
    pub fn into_tree(self) -> Value {
        self.tree
    }

    /// Deserialise the resolved tree into a typed configuration struct.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StrataError::Extract`] when the tree does not match
    /// `T`, which indicates the schema and the struct have drifted apart.
    pub fn extract<T: serde::de::DeserializeOwned>(&self) -> StrataResult<T> {
        Ok(serde_json::from_value(self.tree.clone())?)
    }
}
