use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
    #[error("{0} must be greater than 0")]
    Zero(&'static str),
}

/// Application configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub cache_ttl_secs: u64,
    pub provider_timeout_secs: u64,
    pub provider_base_url: String,
    pub provider_max_requests_per_sec: usize,
}

impl Config {
    pub const DEFAULT_DATABASE_URL: &'static str = "sqlite://market.db";
    pub const DEFAULT_LISTEN_ADDR: &'static str = "127.0.0.1:5000";
    pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
    pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;
    pub const DEFAULT_PROVIDER_BASE_URL: &'static str = "https://query1.finance.yahoo.com";
    pub const DEFAULT_PROVIDER_MAX_REQUESTS_PER_SEC: usize = 5;

    /// Create config from environment variables (after `.env` has been loaded)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_DATABASE_URL.to_string());

        let listen_addr = parse_var(&lookup, "LISTEN_ADDR", Self::DEFAULT_LISTEN_ADDR.parse().ok())?;
        let cache_ttl_secs = parse_var(&lookup, "QUOTE_CACHE_TTL_SECS", Some(Self::DEFAULT_CACHE_TTL_SECS))?;
        let provider_timeout_secs =
            parse_var(&lookup, "PROVIDER_TIMEOUT_SECS", Some(Self::DEFAULT_PROVIDER_TIMEOUT_SECS))?;
        let provider_max_requests_per_sec = parse_var(
            &lookup,
            "PROVIDER_MAX_REQUESTS_PER_SEC",
            Some(Self::DEFAULT_PROVIDER_MAX_REQUESTS_PER_SEC),
        )?;

        let provider_base_url = lookup("PROVIDER_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|| Self::DEFAULT_PROVIDER_BASE_URL.to_string());

        // Validate configuration
        if cache_ttl_secs == 0 {
            return Err(ConfigError::Zero("QUOTE_CACHE_TTL_SECS"));
        }
        if provider_timeout_secs == 0 {
            return Err(ConfigError::Zero("PROVIDER_TIMEOUT_SECS"));
        }
        if provider_max_requests_per_sec == 0 {
            return Err(ConfigError::Zero("PROVIDER_MAX_REQUESTS_PER_SEC"));
        }

        Ok(Self {
            database_url,
            listen_addr,
            cache_ttl_secs,
            provider_timeout_secs,
            provider_base_url,
            provider_max_requests_per_sec,
        })
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: Option<T>) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
            name,
            value: raw,
        }),
        _ => default.ok_or(ConfigError::Invalid {
            name,
            value: String::new(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, "sqlite://market.db");
        assert_eq!(config.listen_addr, "127.0.0.1:5000".parse().unwrap());
        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
        assert_eq!(config.provider_timeout(), Duration::from_secs(10));
        assert_eq!(config.provider_base_url, "https://query1.finance.yahoo.com");
        assert_eq!(config.provider_max_requests_per_sec, 5);
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("LISTEN_ADDR", "0.0.0.0:8080"),
            ("QUOTE_CACHE_TTL_SECS", "60"),
            ("PROVIDER_BASE_URL", "http://localhost:9000/"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.cache_ttl_secs, 60);
        assert_eq!(config.provider_base_url, "http://localhost:9000");
    }

    #[test]
    fn test_rejects_invalid_and_zero_values() {
        assert_eq!(
            config_from(&[("QUOTE_CACHE_TTL_SECS", "five")]).unwrap_err(),
            ConfigError::Invalid {
                name: "QUOTE_CACHE_TTL_SECS",
                value: "five".to_string()
            }
        );
        assert_eq!(
            config_from(&[("PROVIDER_TIMEOUT_SECS", "0")]).unwrap_err(),
            ConfigError::Zero("PROVIDER_TIMEOUT_SECS")
        );
    }
}
