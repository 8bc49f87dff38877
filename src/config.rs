// src/config.rs
//! Runtime settings read from the environment (after `.env` is loaded).

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_ASSETS_DIR: &str = "assets";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub generation_delay: Duration,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub session_idle_timeout: Duration,
    /// Directory served under `/assets`
    pub assets_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let idle_minutes: u64 = parse_or(&lookup, "SESSION_IDLE_MINUTES", 60)?;
        let idle_seconds = idle_minutes.checked_mul(60).ok_or_else(|| ConfigError::Invalid {
            key: "SESSION_IDLE_MINUTES",
            message: format!("{} minutes is out of range", idle_minutes),
        })?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 3000)?,
            generation_delay: Duration::from_millis(parse_or(&lookup, "GENERATION_DELAY_MS", 3000)?),
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            database_max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            session_idle_timeout: Duration::from_secs(idle_seconds),
            assets_dir: lookup("ASSETS_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR)),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: format!("{:?}: {}", raw, e),
        }),
        None => {
            tracing::debug!("{} not set, using default: {}", key, default);
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config(&[]).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.generation_delay, Duration::from_secs(3));
        assert_eq!(config.database_url, None);
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.session_idle_timeout, Duration::from_secs(3600));
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("GENERATION_DELAY_MS", "0"),
            ("DATABASE_URL", "postgres://localhost/trips"),
        ])
        .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.generation_delay, Duration::ZERO);
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/trips"));
    }

    #[test]
    fn empty_database_url_means_none() {
        assert_eq!(config(&[("DATABASE_URL", "")]).unwrap().database_url, None);
    }

    #[test]
    fn malformed_values_are_errors() {
        let err = config(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn oversized_idle_timeout_is_an_error() {
        let max = u64::MAX.to_string();
        let err = config(&[("SESSION_IDLE_MINUTES", max.as_str())]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "SESSION_IDLE_MINUTES", .. }));

        let config = config(&[("SESSION_IDLE_MINUTES", "15")]).unwrap();
        assert_eq!(config.session_idle_timeout, Duration::from_secs(900));
    }

    #[test]
    fn assets_dir_defaults_and_overrides() {
        assert_eq!(config(&[]).unwrap().assets_dir, PathBuf::from("assets"));
        assert_eq!(
            config(&[("ASSETS_DIR", "/srv/trip/assets")]).unwrap().assets_dir,
            PathBuf::from("/srv/trip/assets")
        );
    }
}
