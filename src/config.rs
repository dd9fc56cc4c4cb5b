use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// Lifetime of cached months, settings and holiday lookups
    pub cache_ttl_minutes: u64,
    pub otel_exporter_endpoint: Option<String>,
    pub service_name: String,
    pub metrics_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://workdays.db?mode=rwc".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            cache_ttl_minutes: 30,
            otel_exporter_endpoint: None,
            service_name: "workdays".to_string(),
            metrics_port: 9000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any variable source; unset keys keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let cache_ttl_minutes = parse_var(&lookup, "CACHE_TTL_MINUTES", defaults.cache_ttl_minutes)?;
        if cache_ttl_minutes == 0 {
            return Err(ConfigError::ZeroCacheTtl);
        }
        if cache_ttl_minutes.checked_mul(60).is_none() {
            return Err(ConfigError::InvalidValue {
                key: "CACHE_TTL_MINUTES",
                value: cache_ttl_minutes.to_string(),
            });
        }

        Ok(Config {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_var(&lookup, "SERVER_PORT", defaults.server_port)?,
            cache_ttl_minutes,
            otel_exporter_endpoint: lookup("OTEL_EXPORTER_OTLP_ENDPOINT")
                .filter(|endpoint| !endpoint.trim().is_empty()),
            service_name: lookup("SERVICE_NAME").unwrap_or(defaults.service_name),
            metrics_port: parse_var(&lookup, "METRICS_PORT", defaults.metrics_port)?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_minutes.saturating_mul(60))
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("CACHE_TTL_MINUTES must be at least 1")]
    ZeroCacheTtl,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = from_vars(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server_address(), "127.0.0.1:3000");
        assert_eq!(config.cache_ttl(), Duration::from_secs(30 * 60));
    }

    #[test]
    fn test_overrides() {
        let config = from_vars(&[
            ("SERVER_PORT", "8080"),
            ("CACHE_TTL_MINUTES", "5"),
            ("OTEL_EXPORTER_OTLP_ENDPOINT", "http://collector:4317"),
        ])
        .unwrap();

        assert_eq!(config.server_port, 8080);
        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
        assert_eq!(
            config.otel_exporter_endpoint.as_deref(),
            Some("http://collector:4317")
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert_eq!(
            from_vars(&[("SERVER_PORT", "http")]),
            Err(ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value: "http".to_string()
            })
        );
        assert_eq!(
            from_vars(&[("CACHE_TTL_MINUTES", "0")]),
            Err(ConfigError::ZeroCacheTtl)
        );
    }

    #[test]
    fn test_cache_ttl_overflowing_seconds_is_rejected() {
        let minutes = u64::MAX.to_string();
        assert_eq!(
            from_vars(&[("CACHE_TTL_MINUTES", minutes.as_str())]),
            Err(ConfigError::InvalidValue {
                key: "CACHE_TTL_MINUTES",
                value: minutes.clone()
            })
        );

        let config = Config {
            cache_ttl_minutes: u64::MAX,
            ..Config::default()
        };
        assert_eq!(config.cache_ttl(), Duration::from_secs(u64::MAX));
    }

    #[test]
    fn test_blank_otlp_endpoint_disables_export() {
        let config = from_vars(&[("OTEL_EXPORTER_OTLP_ENDPOINT", " ")]).unwrap();
        assert_eq!(config.otel_exporter_endpoint, None);
    }
}
