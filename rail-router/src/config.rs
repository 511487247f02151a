//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Default interval between line data reloads (5 minutes).
const DEFAULT_REFRESH_SECS: u64 = 300;

/// Errors in server configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable could not be parsed
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Configuration for the routing server binary.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// JSON file listing the network's lines (`RAIL_LINES_PATH`).
    pub lines_path: PathBuf,

    /// Address to listen on (`RAIL_ROUTER_ADDR`).
    pub addr: SocketAddr,

    /// How often to rebuild the graph from the line file
    /// (`RAIL_REFRESH_SECS`). `None` disables reloading.
    pub refresh_interval: Option<Duration>,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let lines_path = lookup("RAIL_LINES_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing("RAIL_LINES_PATH"))?;

        let addr_raw = lookup("RAIL_ROUTER_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "RAIL_ROUTER_ADDR",
            value: addr_raw.clone(),
        })?;

        let refresh_secs = match lookup("RAIL_REFRESH_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "RAIL_REFRESH_SECS",
                value: raw.clone(),
            })?,
            None => DEFAULT_REFRESH_SECS,
        };
        let refresh_interval = (refresh_secs > 0).then(|| Duration::from_secs(refresh_secs));

        Ok(Self {
            lines_path,
            addr,
            refresh_interval,
        })
    }
}
