//! Primary error enum for configuration resolution flows.

use thiserror::Error;

use super::violation::Violations;

/// Convenience alias for results carrying a [`StrataError`].
pub type StrataResult<T> = Result<T, StrataError>;

/// Errors that can occur while resolving a component configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StrataError {
    /// A component schema failed its startup verification.
    #[error("invalid schema for component '{component}': {detail}")]
    InvalidSchema {
        /// Component whose schema is defective.
        component: String,
        /// Every defect found, joined into one report.
        detail: String,
    },

    /// The merged configuration breached its schema; resolution aborted
    /// before normalization with every violation from the pass.
    #[error("configuration for component '{component}' is invalid:\n{violations}")]
    Validation {
        /// Component whose configuration failed validation.
        component: String,
        /// All violations collected in the single validation pass.
        violations: Violations,
    },

    /// A compliance framework identifier was not recognised.
    #[error(
        "unknown compliance framework '{value}' (expected one of: \
         commercial, fedramp-moderate, fedramp-high)"
    )]
    UnknownFramework {
        /// The identifier that failed to parse.
        value: String,
    },

    /// A component's derive hook refused the merged tree.
    #[error("derivation failed for component '{component}': {detail}")]
    Derivation {
        /// Component whose hook failed.
        component: String,
        /// Explanation supplied by the hook.
        detail: String,
    },

    /// Typed extraction of a resolved configuration failed.
    #[error("failed to extract resolved configuration: {source}")]
    Extract {
        /// Underlying deserialisation error.
        #[from]
        source: serde_json::Error,
    },
}

impl StrataError {
    /// Build a [`StrataError::Derivation`] from a component name and reason.
    #[must_use]
    pub fn derivation(component: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Derivation {
            component: component.into(),
            detail: detail.into(),
        }
    }
}
