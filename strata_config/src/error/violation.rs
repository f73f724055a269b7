//! Violation values reported by schema validation.

use std::fmt;

use serde_json::{Number, Value};

use crate::path::FieldPath;
use crate::schema::{FieldKind, ValueKind};

/// Constraint breached by one field of a merged configuration tree.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ViolationKind {
    /// Key present in a strict object but absent from its schema.
    UnknownField,
    /// Value kind differs from the declared field kind.
    KindMismatch {
        /// Kind the schema declares for the field.
        expected: FieldKind,
        /// Kind observed in the merged tree.
        actual: ValueKind,
    },
    /// Required field absent after all layers merged.
    MissingRequired,
    /// String value outside the declared enum variants.
    NotInEnum {
        /// Variants the schema accepts.
        allowed: Vec<String>,
    },
    /// Numeric value outside declared bounds on a hard-reject field.
    OutOfRange {
        /// Inclusive lower bound, when declared.
        min: Option<Number>,
        /// Inclusive upper bound, when declared.
        max: Option<Number>,
    },
    /// String value longer than the declared maximum on a field without
    /// sanitization (sanitized fields truncate instead).
    TooLong {
        /// Maximum length in characters.
        max_length: usize,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField => f.write_str("unknown field"),
            Self::KindMismatch { expected, actual } => {
                write!(f, "expected {expected}, found {actual}")
            }
            Self::MissingRequired => f.write_str("required field missing"),
            Self::NotInEnum { allowed } => {
                write!(f, "not one of [{}]", allowed.join(", "))
            }
            Self::OutOfRange { min, max } => {
                f.write_str("out of range ")?;
                match (min, max) {
                    (Some(low), Some(high)) => write!(f, "[{low}, {high}]"),
                    (Some(low), None) => write!(f, "[{low}, ..]"),
                    (None, Some(high)) => write!(f, "[.., {high}]"),
                    (None, None) => f.write_str("[unbounded]"),
                }
            }
            Self::TooLong { max_length } => {
                write!(f, "longer than {max_length} characters")
            }
        }
    }
}

/// One schema violation: where, what constraint, and the offending value.
///
/// # Examples
///
/// ```rust
/// use strata_config::{FieldKind, FieldPath, ValueKind, Violation, ViolationKind};
/// use serde_json::json;
///
/// let violation = Violation::new(
///     FieldPath::root().child("logging").child("enabled"),
///     ViolationKind::KindMismatch {
///         expected: FieldKind::Boolean,
///         actual: ValueKind::String,
///     },
///     Some(json!("yes")),
/// );
/// assert_eq!(
///     violation.to_string(),
///     "logging.enabled: expected boolean, found string (got \"yes\")"
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Violation {
    path: FieldPath,
    kind: ViolationKind,
    value: Option<Value>,
}

impl Violation {
    /// Record a violation at `path`, optionally carrying the offending value.
    #[must_use]
    pub const fn new(path: FieldPath, kind: ViolationKind, value: Option<Value>) -> Self {
        Self { path, kind, value }
    }

    /// Location of the violating field.
    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Constraint that was breached.
    #[must_use]
    pub const fn kind(&self) -> &ViolationKind {
        &self.kind
    }

    /// The offending value, when one was present.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)?;
        if let Some(value) = &self.value {
            write!(f, " (got {value})")?;
        }
        Ok(())
    }
}

/// Ordered, non-empty collection of [`Violation`]s from one validation pass.
///
/// Every violation found in a single pass arrives together, so a
/// configuration author sees all problems at once rather than one per
/// attempt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Wrap collected violations, yielding `None` when the pass found none.
    #[must_use]
    pub fn from_vec(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self(violations))
        }
    }

    /// Iterate over the contained violations in report order.
    #[must_use = "iterators should be consumed to inspect violations"]
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// Number of violations in the collection.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection is empty (never true for values built through
    /// [`Violations::from_vec`]).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, violation) in self.0.iter().enumerate() {
            if position > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {violation}", position + 1)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
