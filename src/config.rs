use std::net::Ipv4Addr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DATABASE_URL must be set and non-empty")]
    MissingDatabaseUrl,
    #[error("HOST is not a valid IPv4 address")]
    InvalidHost,
    #[error("PORT is not a valid port number")]
    InvalidPort,
}

/// Process configuration resolved from the environment before any pool or
/// listener is constructed. Only DATABASE_URL is required.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: Ipv4Addr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let host = match lookup("HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost)?,
            None => Ipv4Addr::LOCALHOST,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort)?,
            None => 3000,
        };

        Ok(Config {
            database_url,
            host,
            port,
        })
    }
}
