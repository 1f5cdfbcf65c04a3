use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;

use rtag_storage::pool::{DEFAULT_DATABASE_FILE, DEFAULT_MAX_CONNECTIONS};
use rtag_storage::PoolConfig;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {source}")]
    InvalidNumber {
        var: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid host address: {0}")]
    InvalidHost(String),
    #[error("RTAG_MAX_CONNECTIONS must be at least 1")]
    NoConnections,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_path: PathBuf,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_FILE),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source, e.g. the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(host) = lookup("RTAG_HOST") {
            config.host = host
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(host.clone()))?;
        }

        if let Some(port) = lookup("RTAG_PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidNumber {
                    var: "RTAG_PORT",
                    source,
                })?;
            config.port = validate_port(port)?;
        }

        if let Some(path) = lookup("RTAG_DATABASE_PATH") {
            if !path.trim().is_empty() {
                config.database_path = PathBuf::from(path.trim());
            }
        }

        if let Some(max) = lookup("RTAG_MAX_CONNECTIONS") {
            let max = max
                .trim()
                .parse::<u32>()
                .map_err(|source| ConfigError::InvalidNumber {
                    var: "RTAG_MAX_CONNECTIONS",
                    source,
                })?;
            if max == 0 {
                return Err(ConfigError::NoConnections);
            }
            config.max_connections = max;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            database_path: self.database_path.clone(),
            max_connections: self.max_connections,
            ..PoolConfig::default()
        }
    }
}

pub fn validate_port(port: u16) -> Result<u16, ConfigError> {
    if port == 0 {
        return Err(ConfigError::PortOutOfRange(port));
    }
    Ok(port)
}
