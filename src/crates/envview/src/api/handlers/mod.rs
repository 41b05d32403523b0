//! API request handlers

pub mod env;
pub mod json;

pub use env::env;
pub use json::json;
