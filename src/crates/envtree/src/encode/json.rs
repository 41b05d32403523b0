//! JSON rendering of folded trees
//!
//! Branches become objects and leaves become string literals. A leaf is
//! never coerced, so `"5432"` stays a string and `"true"` is not a boolean.

use crate::types::{Children, EnvTreeError, EnvTreeResult, TreeNode};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value as JsonValue};

impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TreeNode::Leaf(value) => serializer.serialize_str(value),
            TreeNode::Branch(children) => {
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for (segment, child) in children {
                    map.serialize_entry(segment, child)?;
                }
                map.end()
            }
        }
    }
}

/// Compact JSON rendering
pub fn render_json(tree: &TreeNode) -> EnvTreeResult<String> {
    Ok(serde_json::to_string(tree)?)
}

/// Indented JSON rendering
pub fn render_json_pretty(tree: &TreeNode) -> EnvTreeResult<String> {
    Ok(serde_json::to_string_pretty(tree)?)
}

impl TreeNode {
    /// Convert into a generic JSON value
    pub fn to_value(&self) -> JsonValue {
        match self {
            TreeNode::Leaf(value) => JsonValue::String(value.clone()),
            TreeNode::Branch(children) => JsonValue::Object(
                children
                    .iter()
                    .map(|(segment, child)| (segment.clone(), child.to_value()))
                    .collect::<Map<String, JsonValue>>(),
            ),
        }
    }
}

/// Reparse a rendered document. Only strings and objects are representable.
impl TryFrom<JsonValue> for TreeNode {
    type Error = EnvTreeError;

    fn try_from(value: JsonValue) -> EnvTreeResult<Self> {
        match value {
            JsonValue::String(value) => Ok(TreeNode::Leaf(value)),
            JsonValue::Object(object) => {
                let mut children = Children::new();
                for (segment, child) in object {
                    children.insert(segment, TreeNode::try_from(child)?);
                }
                Ok(TreeNode::Branch(children))
            }
            other => Err(EnvTreeError::UnsupportedValue(format!(
                "expected string or object, found {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::build_tree_from_pairs;
    use serde_json::json;

    #[test]
    fn test_empty_tree_renders_empty_object() {
        assert_eq!(render_json(&TreeNode::empty_branch()).unwrap(), "{}");
    }

    #[test]
    fn test_nested_tree() {
        let tree = build_tree_from_pairs([
            ("PORT", "8080"),
            ("DB__HOST", "localhost"),
            ("DB__PORT", "5432"),
        ]);
        let rendered: JsonValue = serde_json::from_str(&render_json(&tree).unwrap()).unwrap();
        assert_eq!(
            rendered,
            json!({"PORT": "8080", "DB": {"HOST": "localhost", "PORT": "5432"}})
        );
    }

    #[test]
    fn test_leaves_are_never_coerced() {
        let tree = build_tree_from_pairs([("N", "42"), ("B", "true"), ("Z", "null")]);
        let rendered: JsonValue = serde_json::from_str(&render_json(&tree).unwrap()).unwrap();
        assert_eq!(rendered["N"], json!("42"));
        assert_eq!(rendered["B"], json!("true"));
        assert_eq!(rendered["Z"], json!("null"));
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let tree = build_tree_from_pairs([("MSG", "line1\nline2 \"quoted\" \\ tab\t")]);
        let output = render_json(&tree).unwrap();
        let rendered: JsonValue = serde_json::from_str(&output).unwrap();
        assert_eq!(rendered["MSG"], json!("line1\nline2 \"quoted\" \\ tab\t"));
    }

    #[test]
    fn test_pretty_matches_compact_structurally() {
        let tree = build_tree_from_pairs([("A__B", "1"), ("C", "2")]);
        let compact: JsonValue = serde_json::from_str(&render_json(&tree).unwrap()).unwrap();
        let pretty: JsonValue =
            serde_json::from_str(&render_json_pretty(&tree).unwrap()).unwrap();
        assert_eq!(compact, pretty);
    }

    #[test]
    fn test_to_value_matches_serialization() {
        let tree = build_tree_from_pairs([("A__B", "1"), ("C", "2")]);
        let serialized: JsonValue = serde_json::to_value(&tree).unwrap();
        assert_eq!(tree.to_value(), serialized);
    }

    #[test]
    fn test_reparse_reproduces_tree() {
        let tree = build_tree_from_pairs([("X__Y__Z", "deep"), ("X__W", "w"), ("V", "")]);
        let reparsed: JsonValue = serde_json::from_str(&render_json(&tree).unwrap()).unwrap();
        assert_eq!(TreeNode::try_from(reparsed).unwrap(), tree);
    }

    #[test]
    fn test_reparse_rejects_unrepresentable_values() {
        for value in [json!(1), json!(true), json!(null), json!(["a"]), json!({"a": 1})] {
            let err = TreeNode::try_from(value).unwrap_err();
            assert!(matches!(err, EnvTreeError::UnsupportedValue(_)));
        }
    }
}
