//! Component identifiers.
//!
//! A component is one source unit, named by an ordered path of names that is
//! displayed dot-joined in diagnostics.

use std::fmt;

/// Dotted identifier of a source component
///
/// # Examples
///
/// ```
/// use kalkc_util::ComponentId;
///
/// let id = ComponentId::new(["Test", "Collatz"]);
/// assert_eq!(id.to_string(), "Test.Collatz");
/// assert_eq!(id.name(), Some("Collatz"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId {
    path: Vec<String>,
}

impl ComponentId {
    /// Separator used for display and parsing
    pub const SEPARATOR: char = '.';

    /// Create an identifier from its path segments
    pub fn new<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a dotted path, skipping empty segments
    ///
    /// # Examples
    ///
    /// ```
    /// use kalkc_util::ComponentId;
    ///
    /// let id = ComponentId::parse("Geometry..Shapes.");
    /// assert_eq!(id.segments(), ["Geometry", "Shapes"]);
    /// ```
    pub fn parse(dotted: &str) -> Self {
        Self::new(dotted.split(Self::SEPARATOR).filter(|s| !s.is_empty()))
    }

    /// Path segments in order
    pub fn segments(&self) -> &[String] {
        &self.path
    }

    /// Last segment
    pub fn name(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Returns true if the path has no segments
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Identifier of a nested component
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.push(name.into());
        Self { path }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", Self::SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl From<&str> for ComponentId {
    fn from(dotted: &str) -> Self {
        Self::parse(dotted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_single_segment() {
        assert_eq!(ComponentId::new(["Main"]).to_string(), "Main");
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(ComponentId::default().to_string(), "");
        assert!(ComponentId::default().is_empty());
    }

    #[test]
    fn test_parse_round_trip() {
        let id = ComponentId::parse("A.B.C");
        assert_eq!(id.to_string(), "A.B.C");
        assert_eq!(id.segments().len(), 3);
    }

    #[test]
    fn test_child() {
        let id = ComponentId::from("Test").child("Collatz");
        assert_eq!(id, ComponentId::new(["Test", "Collatz"]));
    }
}
