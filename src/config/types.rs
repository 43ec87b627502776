use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to bind the server to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Interface to bind the server to
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
        }
    }
}

impl ServerConfig {
    /// Port to listen on, preferring an explicit command-line value
    pub fn effective_port(&self, cli_port: Option<u16>) -> u16 {
        cli_port.unwrap_or(self.port)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.bind
            .parse::<IpAddr>()
            .map(|_| ())
            .map_err(|_| format!("Bind address '{}' is not a valid IP address", self.bind))
    }
}

fn default_port() -> u16 {
    4000
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

/// Record store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL (e.g. "sqlite:bookshelf.db?mode=rwc" or "sqlite::memory:")
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Upper bound on pooled connections (in-memory databases always use one)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// Configuration for a private in-memory database
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.url.starts_with("sqlite:") {
            return Err(format!(
                "Database URL '{}' must start with 'sqlite:'",
                self.url
            ));
        }

        if self.max_connections == 0 {
            return Err("max_connections must be at least 1".to_string());
        }

        Ok(())
    }
}

fn default_database_url() -> String {
    "sqlite:bookshelf.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    5
}
