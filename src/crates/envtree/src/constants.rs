//! Constants shared by the filter, the path parser and the renderers

/// Marks a nesting boundary inside a key (`DB__HOST` -> `DB` / `HOST`).
pub const DELIMITER: &str = "__";

/// Variables injected by the shell or container runtime rather than the user.
pub const RESERVED_KEYS: [&str; 5] = ["HOSTNAME", "SHLVL", "HOME", "PATH", "PWD"];

// Flat format
pub const KEY_VALUE_SEPARATOR: char = '=';
pub const LINE_TERMINATOR: char = '\n';
