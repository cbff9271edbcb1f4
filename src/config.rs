// config.rs
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const BIND_ADDR_VAR: &str = "ANALYZER_BIND_ADDR";
pub const BACKEND_URL_VAR: &str = "ANALYZER_BACKEND_URL";
pub const MAX_WORKERS_VAR: &str = "ANALYZER_MAX_WORKERS";
pub const HTTP_TIMEOUT_VAR: &str = "ANALYZER_HTTP_TIMEOUT_SECS";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5050";
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_MAX_WORKERS: usize = 8;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
#[error("invalid {key}={value:?}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub backend_url: Url,
    pub max_workers: usize,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &'static str, default: &str| -> (&'static str, String) {
            let value = lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string());
            (key, value)
        };

        let (key, value) = read(BIND_ADDR_VAR, DEFAULT_BIND_ADDR);
        let bind_addr: SocketAddr = value.parse().map_err(|e| invalid(key, &value, e))?;

        let (key, value) = read(BACKEND_URL_VAR, DEFAULT_BACKEND_URL);
        let backend_url = Url::parse(&value).map_err(|e| invalid(key, &value, e))?;
        if backend_url.cannot_be_a_base() {
            return Err(invalid(key, &value, "not a base URL"));
        }

        let (key, value) = read(MAX_WORKERS_VAR, &DEFAULT_MAX_WORKERS.to_string());
        let max_workers: usize = value.parse().map_err(|e| invalid(key, &value, e))?;
        if max_workers == 0 {
            return Err(invalid(key, &value, "must be at least 1"));
        }

        let (key, value) = read(HTTP_TIMEOUT_VAR, &DEFAULT_HTTP_TIMEOUT_SECS.to_string());
        let timeout_secs: u64 = value.parse().map_err(|e| invalid(key, &value, e))?;

        Ok(Self {
            bind_addr,
            backend_url,
            max_workers,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn invalid(key: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
