//! Server configuration for envview-server
//!
//! Every field has a default, so the service runs without any file. When a
//! file is present it is TOML:
//!
//! ```toml
//! [listen]
//! host = "0.0.0.0"
//! port = 80
//!
//! [environment]
//! dotenv_path = ".env"
//! ```

use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Names the configuration file to load instead of the default location
pub const CONFIG_PATH_VAR: &str = "ENVVIEW_CONFIG";

const DEFAULT_CONFIG_FILE: &str = "envview.toml";

/// Listening socket configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenConfig {
    /// Interface to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to bind to
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    80
}

/// Environment snapshot configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Local override file loaded before the snapshot; may be absent
    #[serde(default = "default_dotenv_path")]
    pub dotenv_path: PathBuf,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            dotenv_path: default_dotenv_path(),
        }
    }
}

fn default_dotenv_path() -> PathBuf {
    PathBuf::from(".env")
}

/// Complete server configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub environment: EnvironmentConfig,
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ServerError::ConfigRead)?;
        Self::from_str(&content)
    }

    /// Load configuration from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from the default location or environment
    ///
    /// Searches for config in:
    /// 1. the file named by `ENVVIEW_CONFIG`
    /// 2. ./envview.toml
    ///
    /// Falls back to defaults when neither exists.
    pub fn load() -> Result<Self> {
        if let Ok(config_path) = std::env::var(CONFIG_PATH_VAR) {
            tracing::info!("Loading configuration from {}", config_path);
            return Self::from_file(config_path);
        }

        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            tracing::info!("Loading configuration from {}", path.display());
            return Self::from_file(path);
        }

        tracing::debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Socket address to listen on
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.listen.host.parse().map_err(|e| {
            ServerError::Config(format!("Invalid listen host '{}': {}", self.listen.host, e))
        })?;
        Ok(SocketAddr::new(ip, self.listen.port))
    }
}
