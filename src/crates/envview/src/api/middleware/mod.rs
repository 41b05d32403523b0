//! API middleware layer

pub mod logging;

pub use logging::logging_layer;
