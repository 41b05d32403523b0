//! `key=value` line format

use crate::constants::{KEY_VALUE_SEPARATOR, LINE_TERMINATOR};
use crate::types::FlatMap;
use std::fmt::Write;

/// Render every pair as a `key=value` line terminated by `\n`.
///
/// Nothing is escaped: a value containing `=` or a newline is written as-is.
pub fn render_flat(variables: &FlatMap) -> String {
    let capacity = variables
        .iter()
        .map(|(key, value)| key.len() + value.len() + 2)
        .sum();
    let mut output = String::with_capacity(capacity);

    for (key, value) in variables {
        // Writing into a String cannot fail
        let _ = write!(
            output,
            "{key}{KEY_VALUE_SEPARATOR}{value}{LINE_TERMINATOR}"
        );
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(pairs: &[(&str, &str)]) -> FlatMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_map_renders_empty_string() {
        assert_eq!(render_flat(&FlatMap::new()), "");
    }

    #[test]
    fn test_one_line_per_pair() {
        let output = render_flat(&flat(&[
            ("PORT", "8080"),
            ("DB__HOST", "localhost"),
            ("DB__PORT", "5432"),
        ]));

        let mut lines: Vec<&str> = output.lines().collect();
        lines.sort_unstable();
        assert_eq!(lines, ["DB__HOST=localhost", "DB__PORT=5432", "PORT=8080"]);
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_values_are_not_escaped() {
        let output = render_flat(&flat(&[("CONN", "user=admin;pass=x"), ("EMPTY", "")]));
        assert!(output.contains("CONN=user=admin;pass=x\n"));
        assert!(output.contains("EMPTY=\n"));
    }

    #[test]
    fn test_output_is_stable_across_calls() {
        let variables = flat(&[("B", "2"), ("A", "1"), ("C", "3")]);
        assert_eq!(render_flat(&variables), render_flat(&variables));
    }
}
