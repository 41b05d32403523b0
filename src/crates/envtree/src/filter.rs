//! Reserved-key filtering applied once to the raw environment

use crate::constants::RESERVED_KEYS;
use crate::types::FlatMap;
use std::collections::HashSet;

/// Drops variables whose names exactly match a reserved set.
///
/// Matching is case-sensitive with no prefix or substring semantics:
/// `PATH` is dropped, `PATHEXT` and `path` are kept.
#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    reserved: HashSet<String>,
}

impl IgnoreFilter {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reserved: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// A filter that ignores nothing
    pub fn empty() -> Self {
        Self {
            reserved: HashSet::new(),
        }
    }

    pub fn is_ignored(&self, key: &str) -> bool {
        self.reserved.contains(key)
    }

    /// Collect the pairs that survive the filter. Empty keys never survive.
    pub fn apply<I, K, V>(&self, pairs: I) -> FlatMap
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .filter(|(key, _)| !key.is_empty() && !self.is_ignored(key))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.reserved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reserved.is_empty()
    }
}

impl Default for IgnoreFilter {
    fn default() -> Self {
        Self::new(RESERVED_KEYS)
    }
}
