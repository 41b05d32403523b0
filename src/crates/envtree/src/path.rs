//! Delimiter-encoded key parsing

use crate::constants::DELIMITER;
use std::fmt;

/// A key split on [`DELIMITER`] into ordered segments.
///
/// Splitting is left to right over non-overlapping matches, so `A___B`
/// yields `["A", "_B"]`. Empty segments produced by leading, trailing or
/// doubled delimiters are kept as literal `""` segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathKey {
    segments: Vec<String>,
}

impl PathKey {
    pub fn parse(key: &str) -> Self {
        Self {
            segments: key.split(DELIMITER).map(str::to_string).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Always at least 1
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True when the key addresses something below the root
    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }

    /// Whether any segment is the empty string
    pub fn has_empty_segment(&self) -> bool {
        self.segments.iter().any(String::is_empty)
    }

    /// Final segment and the parents leading to it
    pub fn split_last(&self) -> (&str, &[String]) {
        match self.segments.split_last() {
            Some((last, parents)) => (last.as_str(), parents),
            None => ("", self.segments.as_slice()),
        }
    }
}

impl From<&str> for PathKey {
    fn from(key: &str) -> Self {
        Self::parse(key)
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join(DELIMITER))
    }
}
