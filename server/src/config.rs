//! Server configuration read from the environment at startup.

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Raises the default log level to debug.
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
        }
    }
}

impl ServerConfig {
    /// Read HOST, PORT and DEBUG from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => defaults.port,
        };

        let debug = lookup("DEBUG")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.debug);

        Ok(Self { host, port, debug })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Log filter used when RUST_LOG is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig> {
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
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.default_log_filter(), "info");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[("HOST", "127.0.0.1"), ("PORT", "8080"), ("DEBUG", "true")])
            .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert!(config.debug);
        assert_eq!(config.default_log_filter(), "debug");
    }

    #[test]
    fn test_debug_flag_values() {
        assert!(config_from(&[("DEBUG", "1")]).unwrap().debug);
        assert!(config_from(&[("DEBUG", "YES")]).unwrap().debug);
        assert!(!config_from(&[("DEBUG", "0")]).unwrap().debug);
        assert!(!config_from(&[("DEBUG", "off")]).unwrap().debug);
    }

    #[test]
    fn test_invalid_port() {
        assert!(config_from(&[("PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn test_blank_host_uses_default() {
        let config = config_from(&[("HOST", "  ")]).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
    }
}
