//! Accumulation and rank ordering of configuration layers.

use std::borrow::Cow;

use camino::Utf8PathBuf;
use serde_json::Value;

use super::ConfigLayer;

/// Builder that accumulates [`ConfigLayer`] instances and orders them by
/// rank for merging.
///
/// Layers may be pushed in any order; [`LayerStack::into_ordered`] sorts
/// them into ascending rank for [`crate::merge_layers`]. The sort is stable,
/// so two layers of the same rank keep their push order and the later one
/// wins the merge. Same-rank layers are a provider-authoring mistake rather
/// than a user configuration error, so the collision is logged as a warning
/// instead of failing the resolution.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use strata_config::{LayerStack, merge_layers};
///
/// let mut stack = LayerStack::new();
/// stack.push_manifest(json!({"capacity": {"min": 1}}), None);
/// stack.push_fallback(json!({"loggingEnabled": false}));
/// stack.push_compliance(json!({"capacity": {"min": 2, "max": 10}}));
///
/// let merged = merge_layers(stack.into_ordered());
/// assert_eq!(
///     merged,
///     json!({"loggingEnabled": false, "capacity": {"min": 1, "max": 10}})
/// );
/// ```
#[derive(Debug, Default)]
pub struct LayerStack {
    layers: Vec<ConfigLayer<'static>>,
}

impl LayerStack {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Create a stack with preallocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layers: Vec::with_capacity(capacity),
        }
    }

    /// Push a hardcoded fallback layer.
    pub fn push_fallback(&mut self, value: Value) {
        self.push_layer(ConfigLayer::fallback(Cow::Owned(value)));
    }

    /// Push a compliance-defaults layer.
    pub fn push_compliance(&mut self, value: Value) {
        self.push_layer(ConfigLayer::compliance(Cow::Owned(value)));
    }

    /// Push an environment-scoped defaults layer.
    pub fn push_environment(&mut self, value: Value, origin: Option<Utf8PathBuf>) {
        self.push_layer(ConfigLayer::environment(Cow::Owned(value), origin));
    }

    /// Push a manifest-override layer.
    pub fn push_manifest(&mut self, value: Value, origin: Option<Utf8PathBuf>) {
        self.push_layer(ConfigLayer::manifest(Cow::Owned(value), origin));
    }

    /// Push a governance policy-override layer.
    pub fn push_policy(&mut self, value: Value, origin: Option<Utf8PathBuf>) {
        self.push_layer(ConfigLayer::policy(Cow::Owned(value), origin));
    }

    /// Push an arbitrary layer.
    pub fn push_layer(&mut self, layer: ConfigLayer<'static>) {
        self.layers.push(layer);
    }

    /// Number of accumulated layers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the stack holds no layers.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Consume the stack, returning its layers in ascending rank order.
    ///
    /// The sort is stable: equal-rank layers keep push order, so the later
    /// push wins the merge. Each equal-rank adjacency logs one warning.
    #[must_use]
    pub fn into_ordered(self) -> Vec<ConfigLayer<'static>> {
        let mut layers = self.layers;
        layers.sort_by_key(|layer| layer.provenance().rank());
        for pair in layers.windows(2) {
            if let [earlier, later] = pair
                && earlier.provenance() == later.provenance()
            {
                warn_same_rank(earlier, later);
            }
        }
        layers
    }
}

fn warn_same_rank(earlier: &ConfigLayer<'_>, later: &ConfigLayer<'_>) {
    tracing::warn!(
        provenance = ?later.provenance(),
        rank = later.provenance().rank(),
        earlier_origin = ?earlier.origin(),
        later_origin = ?later.origin(),
        "two layers share a rank; the later one wins"
    );
}

impl IntoIterator for LayerStack {
    type Item = ConfigLayer<'static>;
    type IntoIter = std::vec::IntoIter<ConfigLayer<'static>>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}
