use crate::{env_or_default, env_parse, ConfigError, FromEnv};
use std::net::Ipv4Addr;

/// Server configuration for HTTP APIs
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// - HOST: defaults to 0.0.0.0
    /// - PORT: defaults to 8080
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_parse("PORT", "8080")?;

        Ok(Self { host, port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 8080,
        }
    }
}

/// Cross-origin policy for browser clients.
///
/// An empty origin list means any origin is accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn permissive() -> Self {
        Self::default()
    }

    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.is_empty()
    }
}

impl FromEnv for CorsConfig {
    /// CORS_ALLOWED_ORIGIN: comma-separated origins; unset, empty or `*` allows all.
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default("CORS_ALLOWED_ORIGIN", "*");
        let allowed_origins = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty() && *origin != "*")
            .map(str::to_string)
            .collect();

        Ok(Self { allowed_origins })
    }
}
