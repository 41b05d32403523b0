//! envview - serve a process's environment over HTTP
//!
//! At startup the service optionally loads a local `.env` override file,
//! snapshots the process environment (minus a few shell-managed names) and
//! then answers two read-only routes:
//!
//! - `GET /env`  - `key=value` lines, `text/plain`
//! - `GET /json` - keys folded on `__` into nested objects, `application/json`
//!
//! The snapshot is immutable after startup and shared by all handlers.

pub mod api;
pub mod config;
pub mod environment;
pub mod error;
pub mod logging;
pub mod server;

pub use api::{create_router, AppState};
pub use config::{EnvironmentConfig, ListenConfig, ServerConfig};
pub use environment::{load_dotenv, snapshot_from_vars, snapshot_process_env, Variables};
pub use error::{Result, ServerError};
pub use server::{bind, serve, shutdown_signal};
