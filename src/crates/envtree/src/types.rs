//! Core types for envtree

use std::collections::BTreeMap;

/// Flat, unnested variable mapping after reserved-key filtering.
///
/// Iteration follows lexicographic key order, so every render of the same
/// map walks the pairs in the same sequence.
pub type FlatMap = BTreeMap<String, String>;

/// Children of a [`TreeNode::Branch`], keyed by segment name.
pub type Children = BTreeMap<String, TreeNode>;

/// A node of the folded variable tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// Terminal node holding a variable value
    Leaf(String),
    /// Internal node holding named children
    Branch(Children),
}

impl TreeNode {
    pub fn empty_branch() -> Self {
        TreeNode::Branch(Children::new())
    }

    pub fn leaf(value: impl Into<String>) -> Self {
        TreeNode::Leaf(value.into())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf(_))
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, TreeNode::Branch(_))
    }

    /// Value of a leaf, `None` for branches
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            TreeNode::Leaf(value) => Some(value),
            TreeNode::Branch(_) => None,
        }
    }

    /// Children of a branch, `None` for leaves
    pub fn children(&self) -> Option<&Children> {
        match self {
            TreeNode::Leaf(_) => None,
            TreeNode::Branch(children) => Some(children),
        }
    }

    /// Look up a direct child by segment name
    pub fn get(&self, segment: &str) -> Option<&TreeNode> {
        self.children().and_then(|children| children.get(segment))
    }

    /// Follow a sequence of segment names from this node
    pub fn get_path<S: AsRef<str>>(&self, segments: &[S]) -> Option<&TreeNode> {
        segments
            .iter()
            .try_fold(self, |node, segment| node.get(segment.as_ref()))
    }

    /// Number of leaves reachable from this node
    pub fn leaf_count(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 1,
            TreeNode::Branch(children) => children.values().map(TreeNode::leaf_count).sum(),
        }
    }

    /// Height of the subtree; a leaf and an empty branch both have depth 0
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 0,
            TreeNode::Branch(children) => children
                .values()
                .map(|child| child.depth() + 1)
                .max()
                .unwrap_or(0),
        }
    }
}

impl Default for TreeNode {
    fn default() -> Self {
        TreeNode::empty_branch()
    }
}

/// Result type alias for envtree operations
pub type EnvTreeResult<T> = Result<T, EnvTreeError>;

/// Errors raised while rendering or reparsing a tree
#[derive(Debug, thiserror::Error)]
pub enum EnvTreeError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        let mut db = Children::new();
        db.insert("HOST".to_string(), TreeNode::leaf("localhost"));
        db.insert("PORT".to_string(), TreeNode::leaf("5432"));

        let mut root = Children::new();
        root.insert("DB".to_string(), TreeNode::Branch(db));
        root.insert("PORT".to_string(), TreeNode::leaf("8080"));
        TreeNode::Branch(root)
    }

    #[test]
    fn test_default_is_empty_branch() {
        let node = TreeNode::default();
        assert!(node.is_branch());
        assert_eq!(node.children().map(Children::len), Some(0));
    }

    #[test]
    fn test_get_path() {
        let tree = sample();
        assert_eq!(
            tree.get_path(&["DB", "HOST"]).and_then(TreeNode::as_leaf),
            Some("localhost")
        );
        assert!(tree.get_path(&["DB", "HOST", "X"]).is_none());
        assert!(tree.get_path(&["MISSING"]).is_none());
    }

    #[test]
    fn test_leaf_count_and_depth() {
        let tree = sample();
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.depth(), 2);
        assert_eq!(TreeNode::empty_branch().depth(), 0);
        assert_eq!(TreeNode::empty_branch().leaf_count(), 0);
    }
}
