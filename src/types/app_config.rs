use std::{net::SocketAddr, time::Duration};

use thiserror::Error;

const DEFAULT_TFL_URL: &str = "https://api.tfl.gov.uk";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),

    #[error("BIND_ADDR is not a valid socket address: {0:?}")]
    InvalidBindAddr(String),
}

#[derive(Clone)]
pub struct SupabaseCredentials {
    pub url: String,
    pub anon_key: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub tfl_host: String,
    pub tfl_key: String,
    pub supabase: Option<SupabaseCredentials>,
    pub auth_key: Option<String>,
    pub upstream_timeout: Duration,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let upstream_timeout = match non_empty("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTimeout(raw))?,
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        let bind_addr = non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr))?;

        let supabase = match (non_empty("SUPABASE_URL"), non_empty("SUPABASE_ANON_KEY")) {
            (Some(url), Some(anon_key)) => Some(SupabaseCredentials { url, anon_key }),
            _ => None,
        };

        Ok(AppConfig {
            tfl_host: non_empty("TFL_URL").unwrap_or_else(|| DEFAULT_TFL_URL.to_string()),
            tfl_key: lookup("TFL_API_KEY").unwrap_or_default(),
            supabase,
            auth_key: non_empty("API_AUTH_KEY"),
            upstream_timeout,
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.tfl_host, "https://api.tfl.gov.uk");
        assert_eq!(config.tfl_key, "");
        assert!(config.supabase.is_none());
        assert!(config.auth_key.is_none());
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
    }

    #[test]
    fn supabase_needs_both_values() {
        let partial = config_from(&[("SUPABASE_URL", "https://x.supabase.co")]).unwrap();
        assert!(partial.supabase.is_none());

        let full = config_from(&[
            ("SUPABASE_URL", "https://x.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ])
        .unwrap();
        let creds = full.supabase.unwrap();
        assert_eq!(creds.url, "https://x.supabase.co");
        assert_eq!(creds.anon_key, "anon");
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("TFL_URL", "http://localhost:9000"),
            ("TFL_API_KEY", "k"),
            ("API_AUTH_KEY", "gate"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
            ("BIND_ADDR", "127.0.0.1:8080"),
        ])
        .unwrap();

        assert_eq!(config.tfl_host, "http://localhost:9000");
        assert_eq!(config.tfl_key, "k");
        assert_eq!(config.auth_key.as_deref(), Some("gate"));
        assert_eq!(config.upstream_timeout, Duration::from_secs(3));
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn malformed_values_fail() {
        assert!(matches!(
            config_from(&[("UPSTREAM_TIMEOUT_SECS", "soon")]),
            Err(ConfigError::InvalidTimeout(_))
        ));
        assert!(matches!(
            config_from(&[("BIND_ADDR", "port 80")]),
            Err(ConfigError::InvalidBindAddr(_))
        ));
    }
}
