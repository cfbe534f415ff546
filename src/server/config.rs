use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Runtime configuration loaded from environment variables.
pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub identity_issuer: String,
    pub identity_audience: String,
    pub identity_jwks_url: String,
}

impl Config {
    /// Reads every required variable, failing on the first one missing or malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            listen_addr: require_env("LISTEN_ADDR")?.parse().map_err(|_| {
                ConfigError::InvalidEnvValue {
                    var: "LISTEN_ADDR".to_string(),
                    reason: "expected a socket address such as 0.0.0.0:8080".to_string(),
                }
            })?,
            identity_issuer: require_env("IDENTITY_ISSUER")?,
            identity_audience: require_env("IDENTITY_AUDIENCE")?,
            identity_jwks_url: require_env("IDENTITY_JWKS_URL")?,
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
