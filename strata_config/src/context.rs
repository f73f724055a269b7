//! Per-resolution context supplied by the calling service manifest.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;

use crate::compliance::ComplianceFramework;

/// Inputs one resolution runs under: the active compliance framework, the
/// service and component instance names, and the externally sourced
/// environment and policy layer values.
///
/// The environment layer carries environment-scoped defaults (rank 2); the
/// policy layer carries governance overrides that outrank the manifest
/// (rank 4). Either may be absent. Origins name the documents the values
/// came from and appear in diagnostics only.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use strata_config::{ComplianceFramework, ResolutionContext};
///
/// let context = ResolutionContext::new(ComplianceFramework::FedrampHigh, "search", "website")
///     .with_environment_defaults(json!({"capacity": {"min": 2}}));
///
/// assert_eq!(context.framework(), ComplianceFramework::FedrampHigh);
/// assert_eq!(context.qualified_name(), "search-website");
/// ```
#[derive(Clone, Debug)]
pub struct ResolutionContext {
    framework: ComplianceFramework,
    service: String,
    component: String,
    environment_defaults: Option<Value>,
    environment_origin: Option<Utf8PathBuf>,
    policy_overrides: Option<Value>,
    policy_origin: Option<Utf8PathBuf>,
}

impl ResolutionContext {
    /// Create a context for one resolution under `framework`.
    #[must_use]
    pub fn new(
        framework: ComplianceFramework,
        service: impl Into<String>,
        component: impl Into<String>,
    ) -> Self {
        Self {
            framework,
            service: service.into(),
            component: component.into(),
            environment_defaults: None,
            environment_origin: None,
            policy_overrides: None,
            policy_origin: None,
        }
    }

    /// Attach environment-scoped defaults (rank 2).
    #[must_use]
    pub fn with_environment_defaults(mut self, value: Value) -> Self {
        self.environment_defaults = Some(value);
        self
    }

    /// Record the document the environment defaults came from.
    #[must_use]
    pub fn with_environment_origin(mut self, origin: Utf8PathBuf) -> Self {
        self.environment_origin = Some(origin);
        self
    }

    /// Attach governance policy overrides (rank 4).
    #[must_use]
    pub fn with_policy_overrides(mut self, value: Value) -> Self {
        self.policy_overrides = Some(value);
        self
    }

    /// Record the document the policy overrides came from.
    #[must_use]
    pub fn with_policy_origin(mut self, origin: Utf8PathBuf) -> Self {
        self.policy_origin = Some(origin);
        self
    }

    /// The compliance framework active for this resolution.
    #[must_use]
    pub const fn framework(&self) -> ComplianceFramework {
        self.framework
    }

    /// Name of the service the component instance belongs to.
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Name of the component instance being resolved.
    #[must_use]
    pub fn component(&self) -> &str {
        &self.component
    }

    /// `service-component`, the conventional seed for derived resource
    /// names when a manifest supplies none.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}-{}", self.service, self.component)
    }

    /// Environment-scoped defaults, when supplied.
    #[must_use]
    pub const fn environment_defaults(&self) -> Option<&Value> {
        self.environment_defaults.as_ref()
    }

    /// Origin of the environment defaults, when known.
    #[must_use]
    pub fn environment_origin(&self) -> Option<&Utf8Path> {
        self.environment_origin.as_deref()
    }

    /// Governance policy overrides, when supplied.
    #[must_use]
    pub const fn policy_overrides(&self) -> Option<&Value> {
        self.policy_overrides.as_ref()
    }

    /// Origin of the policy overrides, when known.
    #[must_use]
    pub fn policy_origin(&self) -> Option<&Utf8Path> {
        self.policy_origin.as_deref()
    }
}
