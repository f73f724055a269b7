//! Kind enums shared by schema declarations and violation reports.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field kind a schema node declares, as named in violation reports.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldKind {
    /// Strict or open object of named fields.
    Object,
    /// Homogeneous list of values.
    Array,
    /// Free-text string.
    String,
    /// Integer or floating-point number.
    Number,
    /// Boolean flag.
    Boolean,
    /// String drawn from a closed variant set.
    Enum,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Enum => "enum",
        })
    }
}

/// JSON kind observed in a merged tree, as named in violation reports.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    /// Explicit `null` (no schema kind admits it; omission expresses
    /// "no opinion").
    Null,
    /// Boolean value.
    Boolean,
    /// Numeric value.
    Number,
    /// String value.
    String,
    /// Array value.
    Array,
    /// Object value.
    Object,
}

impl ValueKind {
    /// The kind of a JSON value.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        })
    }
}

/// Per-field policy for numeric values outside declared bounds.
///
/// `Reject` fields fail validation hard; `Clamp` fields pass validation and
/// are forced into bounds by the normalizer, logged as an informational
/// event. Components declare the policy per field; nothing is inferred.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Out-of-range values are validation failures.
    #[default]
    Reject,
    /// Out-of-range values are forced to the nearest bound after validation.
    Clamp,
}

impl RangePolicy {
    pub(crate) const fn is_reject(&self) -> bool {
        matches!(self, Self::Reject)
    }
}

/// Per-field text normalization applied by the normalizer.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextNormalization {
    /// Leave the string untouched; a declared maximum length is enforced by
    /// the validator.
    #[default]
    None,
    /// Sanitize into a constrained resource identifier: lower-case,
    /// alphanumeric-and-hyphen only, hyphen runs collapsed, no leading or
    /// trailing hyphen, truncated to the declared maximum length.
    ResourceName,
}

impl TextNormalization {
    pub(crate) const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
