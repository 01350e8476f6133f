//! Server settings loaded via OrthoConfig.
//!
//! Values are layered from defaults, an optional configuration file,
//! `DINOS_*` environment variables, and command-line flags.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::DEFAULT_MAX_CONNECTIONS;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The bind address is not a `host:port` socket address.
    #[error("invalid bind address `{value}`: {message}")]
    InvalidBindAddr { value: String, message: String },
}

/// Configuration values controlling the HTTP server and its database.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DINOS")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string. Falls back to `DATABASE_URL`.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 5)]
    pub max_connections: u32,
    /// Apply the schema baseline on startup.
    #[ortho_config(default = true)]
    pub apply_schema: bool,
}

impl AppSettings {
    /// Return the socket address to bind, falling back to `127.0.0.1:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the configured value
    /// does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                message: err.to_string(),
            })
    }

    /// Return the configured database URL, falling back to `DATABASE_URL`.
    ///
    /// `None` means the server keeps animals in memory.
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var(DATABASE_URL_ENV).ok())
            .filter(|url| !url.trim().is_empty())
    }

    /// Return the pool size, never below one connection.
    pub fn max_connections(&self) -> u32 {
        if self.max_connections == 0 {
            DEFAULT_MAX_CONNECTIONS
        } else {
            self.max_connections
        }
    }
}
