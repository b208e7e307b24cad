use std::env;

use thiserror::Error;

/// Environment variable holding the database connection string.
pub const DATABASE_URL: &str = "DATABASE_URL";

/// Errors raised while loading configuration at startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

/// Application configuration loaded once from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Database connection string.
    pub database_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_URL` - Database connection string (required)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup(DATABASE_URL)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL))?;

        Ok(Self { database_url })
    }

    /// Resolve the SQLite target named by the connection string.
    ///
    /// Returns `None` for an in-memory database, otherwise the file path.
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub fn sqlite_path(&self) -> Option<&str> {
        let url = self.database_url.as_str();
        if url == ":memory:" || url == "sqlite::memory:" {
            return None;
        }

        let path = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url);

        Some(path)
    }
}
