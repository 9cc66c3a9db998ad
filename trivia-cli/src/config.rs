//! Configuration file for the trivia CLI
//!
//! Precedence, lowest first: built-in defaults, `~/.trivia/config.toml` (or
//! the file named by `--config`), environment variables, command-line flags.
//! The last two are resolved by clap in the command modules.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use trivia_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use trivia_server::http::server::DEFAULT_TIMEOUT_SECS;
use trivia_server::ServerConfig;

/// Default database location, created on first use
pub const DEFAULT_DATABASE_URL: &str = "sqlite://trivia.db?mode=rwc";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriviaConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
    pub timeout_secs: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: ServerConfig::default().bind_addr,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl TriviaConfig {
    /// Load configuration.
    ///
    /// An explicitly named file must exist. The default file is optional;
    /// without it the built-in defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::config_path();
                if !path.exists() {
                    tracing::debug!("No config file at {:?}, using defaults", path);
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = std::fs::read_to_string(&path)
            .context(format!("Failed to read config file: {:?}", path))?;
        let config = Self::from_toml(&content)
            .context(format!("Failed to parse config file: {:?}", path))?;

        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse configuration from TOML text; missing keys keep their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid TOML")
    }

    /// Get config file path: ~/.trivia/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".trivia")
            .join("config.toml")
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.server.bind,
            request_timeout: Duration::from_secs(self.server.timeout_secs),
        }
    }
}
