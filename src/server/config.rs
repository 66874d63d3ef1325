// src/server/config.rs
//! Configuration file parsing for the recipe server
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address
//! - [database] - Connection string of the recipe store
//!
//! Every key has a default, so an absent file is equivalent to an empty one.
//! The `DATABASE_URL` environment variable and command line flags are
//! applied on top by the binary.

use crate::server::ServerConfig;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

/// Port the original development server listened on
pub const DEFAULT_PORT: u16 = 5000;

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct BookConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSection,

    /// Database settings
    #[serde(default)]
    pub database: DatabaseSection,
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// Bind address (host:port)
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    format!("0.0.0.0:{}", DEFAULT_PORT)
}

/// Database configuration section
#[derive(Debug, Deserialize)]
pub struct DatabaseSection {
    /// Connection string, e.g. `sqlite://recipes.db`
    #[serde(default = "default_database_url")]
    pub url: String,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

fn default_database_url() -> String {
    "sqlite://recipes.db".to_string()
}

impl BookConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: BookConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise start from defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Replace the database URL when an override is present
    pub fn with_database_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.database.url = url;
        }
        self
    }

    /// Replace the bind address when an override is present
    pub fn with_bind(mut self, bind: Option<String>) -> Self {
        if let Some(bind) = bind {
            self.server.bind = bind;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;
        parse_database_url(&self.database.url)?;
        Ok(())
    }

    /// Parsed bind address
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.server.bind))
    }

    /// Filesystem path of the SQLite database
    pub fn db_path(&self) -> Result<String> {
        parse_database_url(&self.database.url)
    }

    /// Convert to the runtime server configuration
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        Ok(ServerConfig {
            bind_addr: self.bind_addr()?,
            db_path: self.db_path()?,
        })
    }
}

/// Turn a database connection string into a SQLite file path
///
/// Accepts `sqlite://<path>`, `sqlite:<path>` or a bare path.
pub fn parse_database_url(url: &str) -> Result<String> {
    let url = url.trim();

    let path = if let Some(rest) = url.strip_prefix("sqlite://") {
        rest
    } else if let Some(rest) = url.strip_prefix("sqlite:") {
        rest
    } else if url.contains("://") {
        bail!("Unsupported database URL: {}", url);
    } else {
        url
    };

    if path.is_empty() {
        bail!("Database URL has no path: {}", url);
    }
    Ok(path.to_string())
}
