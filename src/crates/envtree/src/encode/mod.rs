//! Rendering of flat maps and folded trees

pub mod flat;
pub mod json;

pub use flat::render_flat;
pub use json::{render_json, render_json_pretty};
