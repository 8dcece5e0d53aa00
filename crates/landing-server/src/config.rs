//! Server Configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use landing_content::{ContentError, LandingContent};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR '{value}': {reason}")]
    BindAddr { value: String, reason: String },

    #[error("Invalid landing content: {0}")]
    Content(#[from] ContentError),
}

/// Runtime settings, read from the environment (and `.env`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on (`BIND_ADDR`)
    pub bind_addr: SocketAddr,

    /// Directory holding the built WASM bundle (`STATIC_DIR`)
    pub static_dir: PathBuf,

    /// Optional JSON file overriding the bundled content (`CONTENT_PATH`)
    pub content_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            static_dir: PathBuf::from("static"),
            content_path: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or empty keys keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let bind_addr = match get("BIND_ADDR") {
            Some(value) => value.parse::<SocketAddr>().map_err(|e| ConfigError::BindAddr {
                value,
                reason: e.to_string(),
            })?,
            None => defaults.bind_addr,
        };

        Ok(Self {
            bind_addr,
            static_dir: get("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
            content_path: get("CONTENT_PATH").map(PathBuf::from),
        })
    }

    /// Content to serve: the override file when configured, else the bundled copy
    pub fn load_content(&self) -> Result<LandingContent, ConfigError> {
        match &self.content_path {
            Some(path) => Ok(LandingContent::from_path(path)?),
            None => Ok(LandingContent::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn test_reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("STATIC_DIR", "dist"),
            ("CONTENT_PATH", "content.json"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert_eq!(config.content_path, Some(PathBuf::from("content.json")));
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "not-an-addr")])).unwrap_err();
        assert!(matches!(err, ConfigError::BindAddr { .. }));
    }

    #[test]
    fn test_missing_content_file_is_an_error() {
        let config = ServerConfig {
            content_path: Some(PathBuf::from("/nonexistent/landing-content.json")),
            ..Default::default()
        };
        assert!(matches!(
            config.load_content(),
            Err(ConfigError::Content(ContentError::Io(_)))
        ));
    }

    #[test]
    fn test_bundled_content_without_override() {
        let content = ServerConfig::default().load_content().unwrap();
        assert_eq!(content, LandingContent::default());
    }
}
