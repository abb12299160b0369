// src/config.rs
use std::{env, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    template_dir: String,
    pool: PoolSettings,
}

/// Connection pool limits. Storage consistency is left to the database;
/// these only bound how many connections exist and for how long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub min_connections: u32,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 25,
            min_connections: 0,
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(5 * 60),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://goblog.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".into()
}

fn default_template_dir() -> String {
    "resources/views".into()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let template_dir = lookup("TEMPLATE_DIR").unwrap_or_else(default_template_dir);

        let defaults = PoolSettings::default();
        let pool = PoolSettings {
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", defaults.min_connections)?,
            idle_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DB_IDLE_TIMEOUT_SECS",
                defaults.idle_timeout.as_secs(),
            )?),
            max_lifetime: Duration::from_secs(parse_or(
                &lookup,
                "DB_MAX_LIFETIME_SECS",
                defaults.max_lifetime.as_secs(),
            )?),
        };

        if pool.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DB_MAX_CONNECTIONS must be at least 1".into(),
            ));
        }
        if pool.min_connections > pool.max_connections {
            return Err(ConfigError::Invalid(
                "DB_MIN_CONNECTIONS cannot exceed DB_MAX_CONNECTIONS".into(),
            ));
        }

        Ok(Self {
            database_url,
            listen_addr,
            template_dir,
            pool,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn template_dir(&self) -> &str {
        &self.template_dir
    }

    pub fn pool(&self) -> &PoolSettings {
        &self.pool
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{key} is not a valid number: {raw:?}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:3000");
        assert_eq!(config.template_dir(), "resources/views");
        assert_eq!(config.pool(), &PoolSettings::default());
        assert_eq!(config.pool().max_connections, 25);
        assert_eq!(config.pool().max_lifetime, Duration::from_secs(300));
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DB_MAX_CONNECTIONS", "4"),
            ("DB_MIN_CONNECTIONS", "2"),
            ("DB_MAX_LIFETIME_SECS", "60"),
        ])
        .unwrap();
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.pool().max_connections, 4);
        assert_eq!(config.pool().min_connections, 2);
        assert_eq!(config.pool().max_lifetime, Duration::from_secs(60));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let err = config_from(&[("DB_MAX_CONNECTIONS", "lots")]).unwrap_err();
        assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
    }

    #[test]
    fn pool_bounds_are_checked() {
        assert!(config_from(&[("DB_MAX_CONNECTIONS", "0")]).is_err());
        assert!(config_from(&[("DB_MAX_CONNECTIONS", "2"), ("DB_MIN_CONNECTIONS", "3")]).is_err());
    }
}
