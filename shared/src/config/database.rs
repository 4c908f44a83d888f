//! Database configuration module

use serde::{Deserialize, Serialize};

use super::parse_bool;

/// Database configuration for SQLite connections
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Log every SQL statement at debug level
    #[serde(default)]
    pub enable_logging: bool,

    /// Slow query threshold in milliseconds
    #[serde(default = "default_slow_query_threshold")]
    pub slow_query_threshold: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("sqlite://cmei_app.db"),
            max_connections: 5,
            connect_timeout: 30,
            enable_logging: false,
            slow_query_threshold: default_slow_query_threshold(),
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let url = std::env::var("DATABASE_URL").unwrap_or(defaults.url);
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_connections);
        let connect_timeout = std::env::var("DATABASE_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.connect_timeout);
        let enable_logging = std::env::var("DATABASE_ECHO")
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or(false);

        Self {
            url,
            max_connections,
            connect_timeout,
            enable_logging,
            ..Default::default()
        }
    }

    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Configuration for a private in-memory database.
    ///
    /// Every SQLite in-memory connection is a separate database, so the pool
    /// is pinned to a single connection.
    pub fn in_memory() -> Self {
        Self {
            url: String::from("sqlite::memory:"),
            max_connections: 1,
            ..Default::default()
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Enable SQL query logging
    pub fn with_logging(mut self, enable: bool) -> Self {
        self.enable_logging = enable;
        self
    }

    /// Connection URL safe to print: any `user:password@` part is masked
    pub fn masked_url(&self) -> String {
        match (self.url.find("://"), self.url.rfind('@')) {
            (Some(scheme_end), Some(at)) if at > scheme_end => {
                format!("{}://**:**@{}", &self.url[..scheme_end], &self.url[at + 1..])
            }
            _ => self.url.clone(),
        }
    }
}

fn default_slow_query_threshold() -> u64 {
    1000
}
