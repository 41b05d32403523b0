//! Environment snapshot taken once at startup

use envtree::{FlatMap, IgnoreFilter};
use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;

/// Immutable variable snapshot shared by all request handlers
pub type Variables = Arc<FlatMap>;

/// Load a local override file into the process environment.
///
/// Best-effort: a missing or unreadable file is logged and ignored.
/// Variables already set in the process are not overridden.
/// Returns whether the file was loaded.
pub fn load_dotenv(path: &Path) -> bool {
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::info!("Loaded environment overrides from {}", path.display());
            true
        }
        Err(e) if e.not_found() => {
            tracing::debug!("No override file at {}", path.display());
            false
        }
        Err(e) => {
            tracing::warn!("Ignoring override file {}: {}", path.display(), e);
            false
        }
    }
}

/// Build a snapshot from raw OS pairs, skipping anything that is not UTF-8
pub fn snapshot_from_vars<I>(vars: I, filter: &IgnoreFilter) -> FlatMap
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let pairs = vars
        .into_iter()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (Ok(key), Err(_)) => {
                tracing::warn!("Skipping variable {} with a non UTF-8 value", key);
                None
            }
            (Err(key), _) => {
                tracing::warn!("Skipping variable {:?} with a non UTF-8 name", key);
                None
            }
        });

    filter.apply(pairs)
}

/// Snapshot the current process environment
pub fn snapshot_process_env(filter: &IgnoreFilter) -> Variables {
    let variables = snapshot_from_vars(std::env::vars_os(), filter);
    tracing::info!(
        count = variables.len(),
        ignored = filter.len(),
        "Captured environment snapshot"
    );
    Arc::new(variables)
}
