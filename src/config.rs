//! Server configuration
//!
//! Read once from the environment at startup:
//!
//! | Variable                | Default                  |
//! |-------------------------|--------------------------|
//! | `HOST`                  | `0.0.0.0`                |
//! | `PORT`                  | `5000`                   |
//! | `RAILWAY_PUBLIC_DOMAIN` | `http://localhost:<port>`|
//! | `NOTIF_CAPACITY`        | `100`                    |
//!
//! The local fallback URL is plain `http://` on purpose: a server without a
//! public domain is not behind TLS.

use std::env;

use crate::errors::ConfigError;
use crate::store::DEFAULT_CAPACITY;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Process-wide server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind the listener to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Externally reachable base URL, advertised to dashboards
    pub advertised_url: String,
    /// Maximum number of notifications kept in memory
    pub store_capacity: usize,
}

impl ServerConfig {
    /// Build the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_PORT,
        };

        let store_capacity = match lookup("NOTIF_CAPACITY") {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidCapacity { value }),
            },
            None => DEFAULT_CAPACITY,
        };

        let advertised_url = advertised_url(lookup("RAILWAY_PUBLIC_DOMAIN").as_deref(), port);

        Ok(Self {
            host,
            port,
            advertised_url,
            store_capacity,
        })
    }

    /// `host:port` pair for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Full URL external clients POST notifications to
    pub fn ingest_url(&self) -> String {
        format!("{}/api/send-notification", self.advertised_url)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            advertised_url: advertised_url(None, DEFAULT_PORT),
            store_capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Deployment domains get `https://` unless they already carry a scheme
fn advertised_url(public_domain: Option<&str>, port: u16) -> String {
    match public_domain.map(str::trim).filter(|d| !d.is_empty()) {
        Some(domain) if domain.starts_with("http") => domain.trim_end_matches('/').to_string(),
        Some(domain) => format!("https://{}", domain.trim_end_matches('/')),
        None => format!("http://localhost:{}", port),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 5000);
        assert_eq!(config.advertised_url, "http://localhost:5000");
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_fallback_url_follows_port() {
        let config = config_from(&[("PORT", "8080")]).unwrap();
        assert_eq!(config.advertised_url, "http://localhost:8080");
    }

    #[test]
    fn test_public_domain_gets_https() {
        let config = config_from(&[("RAILWAY_PUBLIC_DOMAIN", "relay.up.railway.app")]).unwrap();
        assert_eq!(config.advertised_url, "https://relay.up.railway.app");
        assert_eq!(
            config.ingest_url(),
            "https://relay.up.railway.app/api/send-notification"
        );
    }

    #[test]
    fn test_public_domain_with_scheme_is_kept() {
        let config = config_from(&[("RAILWAY_PUBLIC_DOMAIN", "http://relay.local/")]).unwrap();
        assert_eq!(config.advertised_url, "http://relay.local");
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidPort {
                value: "not-a-port".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_capacity() {
        assert!(config_from(&[("NOTIF_CAPACITY", "0")]).is_err());
        assert_eq!(
            config_from(&[("NOTIF_CAPACITY", "25")]).unwrap().store_capacity,
            25
        );
    }
}
