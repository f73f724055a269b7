//! Field paths locating configuration values in diagnostics.

use std::fmt;

/// One step in a [`FieldPath`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PathSegment {
    /// Descent into an object field by key.
    Key(String),
    /// Descent into an array element by position.
    Index(usize),
}

/// Location of a value within a configuration tree.
///
/// Paths render dotted, with bracketed array positions: `capacity.min`,
/// `rules[2].name`. The empty path addresses the tree root and renders as
/// `(root)`.
///
/// # Examples
///
/// ```rust
/// use strata_config::FieldPath;
///
/// let path = FieldPath::root().child("rules").index(2).child("name");
/// assert_eq!(path.to_string(), "rules[2].name");
/// assert_eq!(FieldPath::root().to_string(), "(root)");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Path addressing the root of the tree.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Returns a path one object key deeper.
    #[must_use]
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(key.to_owned()));
        Self { segments }
    }

    /// Returns a path one array element deeper.
    #[must_use]
    pub fn index(&self, position: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(position));
        Self { segments }
    }

    /// Whether the path addresses the root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments making up the path, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("(root)");
        }
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) => {
                    if position > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                PathSegment::Index(element) => write!(f, "[{element}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::FieldPath;

    #[test]
    fn root_renders_as_root_marker() {
        assert_eq!(FieldPath::root().to_string(), "(root)");
        assert!(FieldPath::root().is_root());
    }

    #[test]
    fn nested_keys_render_dotted() {
        let path = FieldPath::root().child("logging").child("enabled");
        assert_eq!(path.to_string(), "logging.enabled");
        assert!(!path.is_root());
    }

    #[test]
    fn array_positions_render_bracketed() {
        let path = FieldPath::root().child("ingress").index(0).child("port");
        assert_eq!(path.to_string(), "ingress[0].port");
    }

    #[test]
    fn index_at_root_renders_bare() {
        assert_eq!(FieldPath::root().index(3).to_string(), "[3]");
    }

    #[test]
    fn child_does_not_mutate_parent() {
        let parent = FieldPath::root().child("capacity");
        let unused = parent.child("min");
        assert_eq!(parent.segments().len(), 1);
        assert_eq!(unused.segments().len(), 2);
    }
}
