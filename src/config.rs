//! Process configuration read from the environment (and `.env` via dotenvy in main).

use crate::error::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://forum.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_DOCS_ROUTE: &str = "/api/docs/apispec_1.json";
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// SQLite connection string; the file is created when missing.
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    /// Path serving the generated OpenAPI document.
    pub docs_route: String,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            docs_route: DEFAULT_DOCS_ROUTE.into(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl AppConfig {
    /// Read `DATABASE_URL`, `BIND_ADDR`, `DATABASE_MAX_CONNECTIONS`, `DOCS_ROUTE` and `BODY_LIMIT_BYTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &'static str, default: String| -> Result<String, ConfigError> {
            match lookup(key) {
                None => Ok(default),
                Some(v) if v.trim().is_empty() => Err(ConfigError::Empty { key }),
                Some(v) => Ok(v.trim().to_string()),
            }
        };

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            None => defaults.max_connections,
            Some(v) => parse_positive("DATABASE_MAX_CONNECTIONS", &v)?,
        };
        let body_limit = match lookup("BODY_LIMIT_BYTES") {
            None => defaults.body_limit,
            Some(v) => parse_positive("BODY_LIMIT_BYTES", &v)?,
        };
        let docs_route = text("DOCS_ROUTE", defaults.docs_route)?;
        if !docs_route.starts_with('/') {
            return Err(ConfigError::Invalid {
                key: "DOCS_ROUTE",
                value: docs_route,
            });
        }

        Ok(Self {
            database_url: text("DATABASE_URL", defaults.database_url)?,
            bind_addr: text("BIND_ADDR", defaults.bind_addr)?,
            max_connections,
            docs_route,
            body_limit,
        })
    }
}

fn parse_positive<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match raw.trim().parse::<T>() {
        Ok(n) if n > T::default() => Ok(n),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
        }),
    }
}
