//! envtree - fold flat environment variables into a nested tree
//!
//! Keys encode nesting with a double underscore: `DB__HOST=localhost` becomes
//! `{"DB": {"HOST": "localhost"}}`. This crate holds the pure core of the
//! `envview` service: reserved-key filtering, key parsing, tree construction
//! and the two renderings served over HTTP.
//!
//! # Example
//!
//! ```rust
//! use envtree::{render_flat, render_structured, IgnoreFilter};
//!
//! let variables = IgnoreFilter::default().apply([
//!     ("PORT", "8080"),
//!     ("DB__HOST", "localhost"),
//!     ("HOSTNAME", "ignored-host"),
//! ]);
//!
//! assert_eq!(render_flat(&variables), "DB__HOST=localhost\nPORT=8080\n");
//! assert_eq!(
//!     render_structured(&variables).unwrap(),
//!     r#"{"DB":{"HOST":"localhost"},"PORT":"8080"}"#
//! );
//! ```

pub mod build;
pub mod constants;
pub mod encode;
pub mod filter;
pub mod path;
pub mod types;

pub use build::{build_tree, build_tree_from_pairs, TreeBuilder};
pub use constants::{DELIMITER, RESERVED_KEYS};
pub use encode::{render_flat, render_json, render_json_pretty};
pub use filter::IgnoreFilter;
pub use path::PathKey;
pub use types::{Children, EnvTreeError, EnvTreeResult, FlatMap, TreeNode};

/// Fold `variables` into a tree and render it as compact JSON
pub fn render_structured(variables: &FlatMap) -> EnvTreeResult<String> {
    render_json(&build_tree(variables))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_structured_empty() {
        assert_eq!(render_structured(&FlatMap::new()).unwrap(), "{}");
    }

    #[test]
    fn test_render_structured_scenario() {
        let variables = IgnoreFilter::default().apply([
            ("PORT", "8080"),
            ("DB__HOST", "localhost"),
            ("DB__PORT", "5432"),
        ]);
        assert_eq!(
            render_structured(&variables).unwrap(),
            r#"{"DB":{"HOST":"localhost","PORT":"5432"},"PORT":"8080"}"#
        );
    }
}
