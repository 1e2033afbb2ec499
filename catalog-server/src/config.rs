//! Server configuration module
//!
//! Handles loading configuration from environment variables with sensible defaults.

use std::net::SocketAddr;

/// Runtime environment of the process.
///
/// Development loads a local `.env` file before reading configuration;
/// production relies on real environment variables only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Fixed username/password pair for the HTTP Basic gate.
///
/// The gate is enabled only when both values are present and non-empty.
#[derive(Debug, Clone)]
pub struct BasicAuthCredentials {
    pub username: String,
    pub password: String,
}

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port (default: 3001)
    pub port: u16,
    /// Server host (default: 127.0.0.1)
    pub host: [u8; 4],
    /// Postgres connection string; absence is logged, not fatal
    pub database_url: Option<String>,
    /// Basic-auth pair; `None` disables the auth gate entirely
    pub basic_auth: Option<BasicAuthCredentials>,
    /// Request body limit in MB (default: 10, images travel as base64 JSON)
    pub body_limit_mb: usize,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Runtime environment (default: development)
    pub environment: Environment,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3001,
            host: [127, 0, 0, 1],
            database_url: None,
            basic_auth: None,
            body_limit_mb: 10,
            timeout_secs: 30,
            environment: Environment::Development,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3001);

        let host = std::env::var("HOST")
            .ok()
            .map(|h| {
                if h == "0.0.0.0" {
                    [0, 0, 0, 0]
                } else {
                    [127, 0, 0, 1]
                }
            })
            .unwrap_or([127, 0, 0, 1]);

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.is_empty());

        let basic_auth = basic_auth_from(
            std::env::var("AUTH_USERNAME").ok(),
            std::env::var("AUTH_PASSWORD").ok(),
        );

        let body_limit_mb = std::env::var("BODY_LIMIT_MB")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let timeout_secs = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let environment = environment_from(std::env::var("APP_ENV").ok().as_deref());

        Self {
            port,
            host,
            database_url,
            basic_auth,
            body_limit_mb,
            timeout_secs,
            environment,
        }
    }

    /// Get socket address from config
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

/// The auth gate requires both values present and non-empty; anything else
/// disables it.
fn basic_auth_from(
    username: Option<String>,
    password: Option<String>,
) -> Option<BasicAuthCredentials> {
    match (username, password) {
        (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
            Some(BasicAuthCredentials { username, password })
        }
        _ => None,
    }
}

fn environment_from(app_env: Option<&str>) -> Environment {
    match app_env {
        Some("production") => Environment::Production,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 3001);
        assert_eq!(config.body_limit_mb, 10);
        assert!(config.database_url.is_none());
        assert!(config.basic_auth.is_none());
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_basic_auth_requires_both_values() {
        assert!(basic_auth_from(Some("admin".into()), Some("secret".into())).is_some());
        assert!(basic_auth_from(Some("admin".into()), None).is_none());
        assert!(basic_auth_from(None, Some("secret".into())).is_none());
        assert!(basic_auth_from(None, None).is_none());
    }

    #[test]
    fn test_basic_auth_rejects_empty_values() {
        assert!(basic_auth_from(Some("".into()), Some("secret".into())).is_none());
        assert!(basic_auth_from(Some("admin".into()), Some("".into())).is_none());
    }

    #[test]
    fn test_environment_from_app_env() {
        assert_eq!(environment_from(Some("production")), Environment::Production);
        assert_eq!(environment_from(Some("development")), Environment::Development);
        assert_eq!(environment_from(Some("staging")), Environment::Development);
        assert_eq!(environment_from(None), Environment::Development);
    }

    #[test]
    fn test_socket_addr() {
        let config = Config::default();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3001");
    }
}
