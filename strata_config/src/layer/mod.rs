//! Ranked configuration layers and their composition.

mod stack;

pub use stack::LayerStack;

use std::borrow::Cow;

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;

/// Provenance of a configuration layer, in ascending precedence order.
///
/// The declaration order is the rank order: hardcoded fallbacks lose to
/// compliance defaults, which lose to environment-scoped defaults, manifest
/// overrides, and finally governance policy overrides.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
#[non_exhaustive]
pub enum LayerProvenance {
    /// Hardcoded fallback values baked into the component (rank 0).
    Fallback,
    /// Defaults selected by the active compliance framework (rank 1).
    Compliance,
    /// Environment-scoped defaults (rank 2).
    Environment,
    /// Manifest-author overrides (rank 3).
    Manifest,
    /// Governance policy overrides (rank 4).
    Policy,
}

impl LayerProvenance {
    /// Numeric rank of the layer; higher ranks win scalar conflicts.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Fallback => 0,
            Self::Compliance => 1,
            Self::Environment => 2,
            Self::Manifest => 3,
            Self::Policy => 4,
        }
    }
}

/// One partial configuration value with its provenance and optional origin.
///
/// A layer expresses "no opinion" about a field by omitting the key
/// entirely; an explicit `null` is a defined value that overwrites lower
/// layers and is then rejected by validation, since no schema kind admits
/// null. The origin names the manifest or policy document the layer came
/// from and appears in diagnostics only.
#[derive(Clone, Debug)]
pub struct ConfigLayer<'a> {
    provenance: LayerProvenance,
    value: Cow<'a, Value>,
    origin: Option<Utf8PathBuf>,
}

impl<'a> ConfigLayer<'a> {
    /// Construct a hardcoded fallback layer (rank 0).
    #[must_use]
    pub const fn fallback(value: Cow<'a, Value>) -> Self {
        Self {
            provenance: LayerProvenance::Fallback,
            value,
            origin: None,
        }
    }

    /// Construct a compliance-defaults layer (rank 1).
    #[must_use]
    pub const fn compliance(value: Cow<'a, Value>) -> Self {
        Self {
            provenance: LayerProvenance::Compliance,
            value,
            origin: None,
        }
    }

    /// Construct an environment-scoped defaults layer (rank 2).
    #[must_use]
    pub const fn environment(value: Cow<'a, Value>, origin: Option<Utf8PathBuf>) -> Self {
        Self {
            provenance: LayerProvenance::Environment,
            value,
            origin,
        }
    }

    /// Construct a manifest-override layer (rank 3).
    #[must_use]
    pub const fn manifest(value: Cow<'a, Value>, origin: Option<Utf8PathBuf>) -> Self {
        Self {
            provenance: LayerProvenance::Manifest,
            value,
            origin,
        }
    }

    /// Construct a governance policy-override layer (rank 4).
    #[must_use]
    pub const fn policy(value: Cow<'a, Value>, origin: Option<Utf8PathBuf>) -> Self {
        Self {
            provenance: LayerProvenance::Policy,
            value,
            origin,
        }
    }

    /// Returns the provenance of the layer.
    #[must_use]
    pub const fn provenance(&self) -> LayerProvenance {
        self.provenance
    }

    /// Returns the document this layer was sourced from, when known.
    #[must_use]
    pub fn origin(&self) -> Option<&Utf8Path> {
        self.origin.as_deref()
    }

    /// Returns an owned JSON value representing the layer.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value.into_owned()
    }

    /// Convert this layer into a `'static` owned variant.
    #[must_use]
    pub fn into_owned(self) -> ConfigLayer<'static> {
        ConfigLayer {
            provenance: self.provenance,
            value: Cow::Owned(self.value.into_owned()),
            origin: self.origin,
        }
    }
}
