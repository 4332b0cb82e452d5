use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::error::{RosterError, Result};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const ENDPOINT_ENV: &str = "ROSTER_ENDPOINT";

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| RosterError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| RosterError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "roster")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(RosterError::NoConfigDir)
    }

    /// Endpoint with flag, then env var, then config file, then default.
    pub fn endpoint(&self, explicit: Option<&str>) -> Result<Url> {
        self.resolve_endpoint(explicit, std::env::var(ENDPOINT_ENV).ok())
    }

    fn resolve_endpoint(&self, explicit: Option<&str>, env: Option<String>) -> Result<Url> {
        let raw = explicit
            .map(String::from)
            .or(env)
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Url::parse(&raw).map_err(|e| RosterError::InvalidEndpoint { url: raw, source: e })
    }

    /// Request timeout; 0 is treated as unset.
    pub fn timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = Config::default();
        let url = config.resolve_endpoint(None, None).unwrap();
        assert_eq!(url.as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_endpoint_precedence() {
        let config = Config {
            endpoint: Some("http://file:1/".to_string()),
            timeout_secs: None,
        };

        let from_file = config.resolve_endpoint(None, None).unwrap();
        assert_eq!(from_file.as_str(), "http://file:1/");

        let from_env = config
            .resolve_endpoint(None, Some("http://env:2/".to_string()))
            .unwrap();
        assert_eq!(from_env.as_str(), "http://env:2/");

        let from_flag = config
            .resolve_endpoint(Some("http://flag:3/"), Some("http://env:2/".to_string()))
            .unwrap();
        assert_eq!(from_flag.as_str(), "http://flag:3/");
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = Config::default();
        let err = config.resolve_endpoint(Some("not a url"), None).unwrap_err();
        assert!(matches!(err, RosterError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_parse_config_file() {
        let config: Config = toml::from_str("endpoint = \"http://10.0.0.5:8000/\"\ntimeout_secs = 3\n").unwrap();
        assert_eq!(config.endpoint.as_deref(), Some("http://10.0.0.5:8000/"));
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(Config::default().timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_zero_timeout_uses_default() {
        let config: Config = toml::from_str("timeout_secs = 0\n").unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }
}
