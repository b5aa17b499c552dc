//! Environment configuration for the server.

use crate::server::error::config::ConfigError;

/// Database used when `DATABASE_URL` is not set.
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holonet.db?mode=rwc";
/// Address bound when `HOST` is not set.
pub static DEFAULT_HOST: &str = "0.0.0.0";
/// Port bound when `PORT` is not set.
pub static DEFAULT_PORT: u16 = 3000;

/// Server configuration read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SeaORM connection URL
    pub database_url: String,
    /// Address the listener binds to
    pub host: String,
    /// Port the listener binds to
    pub port: u16,
}

impl Config {
    /// Reads `DATABASE_URL`, `HOST` and `PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
        )
    }

    /// Builds the configuration from raw variable values, applying defaults for unset ones.
    pub fn from_vars(
        database_url: Option<String>,
        host: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let database_url = match database_url {
            Some(url) if url.starts_with("postgres://") => {
                url.replacen("postgres://", "postgresql://", 1)
            }
            Some(url) => url,
            None => DEFAULT_DATABASE_URL.to_string(),
        };

        let port = match port {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }
}
