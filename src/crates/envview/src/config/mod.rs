//! Configuration module for envview
//!
//! Loads the optional `envview.toml` server configuration.

pub mod server;

pub use server::{EnvironmentConfig, ListenConfig, ServerConfig, CONFIG_PATH_VAR};
