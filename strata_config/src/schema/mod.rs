//! Schema model describing the shape of a component configuration.
//!
//! A component defines one immutable [`SchemaNode`] tree per configuration
//! type. The tree fully describes every field any layer may set: kinds,
//! required-ness, defaults, enum variants, numeric bounds, and whether an
//! object accepts undeclared keys. Schemas are plain data with a serde
//! document form, so a component may equally embed one as a static JSON
//! document.

mod kind;
mod verify;

pub use kind::{FieldKind, RangePolicy, TextNormalization, ValueKind};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Kind-specific payload of a schema node.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub(crate) enum SchemaKind {
    /// Boolean flag.
    Boolean,
    /// Free-text string, optionally bounded and sanitized.
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
        #[serde(default, skip_serializing_if = "TextNormalization::is_none")]
        normalize: TextNormalization,
    },
    /// Number with optional inclusive bounds and an out-of-range policy.
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<Number>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<Number>,
        #[serde(default, skip_serializing_if = "RangePolicy::is_reject")]
        out_of_range: RangePolicy,
    },
    /// String drawn from a closed variant set.
    Enum { variants: Vec<String> },
    /// Homogeneous array; higher layers replace arrays wholesale.
    Array { items: Box<SchemaNode> },
    /// Object of named children; strict unless opened.
    Object {
        #[serde(default)]
        children: BTreeMap<String, SchemaNode>,
        #[serde(default)]
        open: bool,
    },
}

/// One node of a component configuration schema.
///
/// Nodes are built through consuming constructor and refinement methods and
/// are immutable once handed to the resolver. [`SchemaNode::verify`] checks
/// the tree itself before first use.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use strata_config::SchemaNode;
///
/// let schema = SchemaNode::object([
///     ("capacity", SchemaNode::object([
///         ("min", SchemaNode::number().min(1u64).required()),
///         ("max", SchemaNode::number().min(1u64).required()),
///     ]).required()),
///     ("priceClass", SchemaNode::enumeration([
///         "PriceClass_100", "PriceClass_200", "PriceClass_All",
///     ]).default_value(json!("PriceClass_100"))),
/// ]);
/// assert!(schema.verify().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SchemaNode {
    #[serde(flatten)]
    kind: SchemaKind,
    #[serde(default)]
    required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default: Option<Value>,
    // Builder misuse (for example a numeric bound on a string field) is
    // recorded here and surfaced by `verify`, never panicked on.
    #[serde(skip)]
    misuse: Vec<String>,
}

impl SchemaNode {
    const fn with_kind(kind: SchemaKind) -> Self {
        Self {
            kind,
            required: false,
            default: None,
            misuse: Vec::new(),
        }
    }

    /// Declare a boolean field.
    #[must_use]
    pub const fn boolean() -> Self {
        Self::with_kind(SchemaKind::Boolean)
    }

    /// Declare a free-text string field.
    #[must_use]
    pub const fn string() -> Self {
        Self::with_kind(SchemaKind::String {
            max_length: None,
            normalize: TextNormalization::None,
        })
    }

    /// Declare a numeric field.
    #[must_use]
    pub const fn number() -> Self {
        Self::with_kind(SchemaKind::Number {
            min: None,
            max: None,
            out_of_range: RangePolicy::Reject,
        })
    }

    /// Declare an enum field accepting the given string variants.
    #[must_use]
    pub fn enumeration<S: Into<String>>(variants: impl IntoIterator<Item = S>) -> Self {
        Self::with_kind(SchemaKind::Enum {
            variants: variants.into_iter().map(Into::into).collect(),
        })
    }

    /// Declare an array field whose elements follow `items`.
    #[must_use]
    pub fn array(items: Self) -> Self {
        Self::with_kind(SchemaKind::Array {
            items: Box::new(items),
        })
    }

    /// Declare a strict object field with the given children; undeclared
    /// keys are rejected unless the node is [`SchemaNode::open`]ed.
    #[must_use]
    pub fn object<S, I>(children: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Self)>,
    {
        Self::with_kind(SchemaKind::Object {
            children: children
                .into_iter()
                .map(|(name, child)| (name.into(), child))
                .collect(),
            open: false,
        })
    }

    /// Mark the field as required after all layers merge. Any layer may
    /// satisfy the requirement, not necessarily the manifest author's.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Declare the literal the normalizer fills in when every layer omits
    /// the field. Mutually exclusive with [`SchemaNode::required`].
    #[must_use]
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Declare an inclusive lower bound on a numeric field.
    #[must_use]
    pub fn min(mut self, bound: impl Into<Number>) -> Self {
        match &mut self.kind {
            SchemaKind::Number { min, .. } => *min = Some(bound.into()),
            _ => self.misuse.push("numeric bound on a non-number field".to_owned()),
        }
        self
    }

    /// Declare an inclusive upper bound on a numeric field.
    #[must_use]
    pub fn max(mut self, bound: impl Into<Number>) -> Self {
        match &mut self.kind {
            SchemaKind::Number { max, .. } => *max = Some(bound.into()),
            _ => self.misuse.push("numeric bound on a non-number field".to_owned()),
        }
        self
    }

    /// Opt a numeric field out of hard bound rejection: the normalizer
    /// forces out-of-range values to the nearest bound instead.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        match &mut self.kind {
            SchemaKind::Number { out_of_range, .. } => *out_of_range = RangePolicy::Clamp,
            _ => self.misuse.push("clamp policy on a non-number field".to_owned()),
        }
        self
    }

    /// Declare a maximum length, in characters, for a string field.
    #[must_use]
    pub fn max_length(mut self, limit: usize) -> Self {
        match &mut self.kind {
            SchemaKind::String { max_length, .. } => *max_length = Some(limit),
            _ => self.misuse.push("maximum length on a non-string field".to_owned()),
        }
        self
    }

    /// Opt a string field into resource-name sanitization by the normalizer.
    #[must_use]
    pub fn resource_name(mut self) -> Self {
        match &mut self.kind {
            SchemaKind::String { normalize, .. } => *normalize = TextNormalization::ResourceName,
            _ => self.misuse.push("resource-name sanitization on a non-string field".to_owned()),
        }
        self
    }

    /// Allow undeclared keys on an object field.
    #[must_use]
    pub fn open(mut self) -> Self {
        match &mut self.kind {
            SchemaKind::Object { open, .. } => *open = true,
            _ => self.misuse.push("open-object marker on a non-object field".to_owned()),
        }
        self
    }

    /// The flat kind of the field, as named in violation reports.
    #[must_use]
    pub const fn field_kind(&self) -> FieldKind {
        match &self.kind {
            SchemaKind::Boolean => FieldKind::Boolean,
            SchemaKind::String { .. } => FieldKind::String,
            SchemaKind::Number { .. } => FieldKind::Number,
            SchemaKind::Enum { .. } => FieldKind::Enum,
            SchemaKind::Array { .. } => FieldKind::Array,
            SchemaKind::Object { .. } => FieldKind::Object,
        }
    }

    /// Whether the field must be present after all layers merge.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    pub(crate) const fn kind(&self) -> &SchemaKind {
        &self.kind
    }

    pub(crate) const fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub(crate) fn misuse(&self) -> &[String] {
        &self.misuse
    }
}

#[cfg(test)]
mod tests;
