//! Folding flat keys into a nested tree
//!
//! Every key is split into a [`PathKey`]; all segments but the last name
//! branches (created on demand), the last names the leaf holding the value.
//!
//! Two keys can demand incompatible shapes at the same path, e.g. `A` wants
//! a leaf where `A__B` wants a branch. Such conflicts are resolved by
//! whichever pair is inserted last:
//!
//! - a leaf standing where a branch is needed is replaced by an empty branch
//!   and its value is dropped;
//! - a leaf assigned where a branch already exists replaces the whole branch.
//!
//! The result is therefore sensitive to insertion order. [`build_tree`] uses
//! the lexicographic order of [`FlatMap`], in which a key always precedes its
//! extensions (`A` < `A__B`), so the longer key wins.

use crate::path::PathKey;
use crate::types::{Children, FlatMap, TreeNode};

/// Incremental tree construction
#[derive(Debug, Default)]
pub struct TreeBuilder {
    root: Children,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `value` at `path`, overwriting whatever was there
    pub fn insert(&mut self, path: &PathKey, value: impl Into<String>) {
        insert_path(&mut self.root, path.segments(), value.into());
    }

    /// Parse `key` and assign `value` at the resulting path
    pub fn insert_key(&mut self, key: &str, value: impl Into<String>) {
        self.insert(&PathKey::parse(key), value);
    }

    /// Finish construction; the returned root is always a branch
    pub fn finish(self) -> TreeNode {
        TreeNode::Branch(self.root)
    }
}

/// Build a tree from a flat map, inserting pairs in the map's key order
pub fn build_tree(variables: &FlatMap) -> TreeNode {
    build_tree_from_pairs(
        variables
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str())),
    )
}

/// Build a tree inserting pairs exactly in the order given
pub fn build_tree_from_pairs<I, K, V>(pairs: I) -> TreeNode
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut builder = TreeBuilder::new();
    for (key, value) in pairs {
        builder.insert_key(key.as_ref(), value);
    }
    builder.finish()
}

fn insert_path(target: &mut Children, segments: &[String], value: String) {
    match segments {
        [] => {}
        [last] => {
            if let Some(TreeNode::Branch(discarded)) = target.get(last) {
                tracing::debug!(
                    segment = %last,
                    discarded_leaves = discarded.len(),
                    "leaf replaces existing branch"
                );
            }
            target.insert(last.clone(), TreeNode::Leaf(value));
        }
        [segment, rest @ ..] => {
            let slot = target
                .entry(segment.clone())
                .or_insert_with(TreeNode::empty_branch);

            if let TreeNode::Leaf(discarded) = slot {
                tracing::debug!(
                    segment = %segment,
                    discarded = %discarded,
                    "branch replaces existing leaf"
                );
                *slot = TreeNode::empty_branch();
            }

            if let TreeNode::Branch(children) = slot {
                insert_path(children, rest, value);
            }
        }
    }
}
