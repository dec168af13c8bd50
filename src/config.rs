use std::{env, str::FromStr, time::Duration};

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: Duration,
    pub idle_timeout: Duration,
    pub acquire_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub request_timeout: Duration,
    pub shutdown_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = var("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match var("APP_PORT").or_else(|| var("PORT")) {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("APP_PORT/PORT is not a valid port: {raw}"))?,
            None => 8080,
        };

        let url = match var("DATABASE_URL") {
            Some(url) => url,
            None => database_url_from_parts(&var),
        };

        let database = DatabaseConfig {
            url,
            max_connections: parse_or(&var, "DB_MAX_CONNECTIONS", 25)?,
            min_connections: parse_or(&var, "DB_MIN_CONNECTIONS", 5)?,
            max_lifetime: Duration::from_secs(parse_or(&var, "DB_MAX_LIFETIME_SECS", 300)?),
            idle_timeout: Duration::from_secs(parse_or(&var, "DB_IDLE_TIMEOUT_SECS", 600)?),
            acquire_timeout: Duration::from_secs(parse_or(&var, "DB_ACQUIRE_TIMEOUT_SECS", 5)?),
        };

        Ok(Self {
            host,
            port,
            database,
            request_timeout: Duration::from_secs(parse_or(&var, "REQUEST_TIMEOUT_SECS", 15)?),
            shutdown_timeout: Duration::from_secs(parse_or(&var, "SHUTDOWN_TIMEOUT_SECS", 5)?),
        })
    }
}

fn database_url_from_parts(var: &impl Fn(&str) -> Option<String>) -> String {
    let host = var("DB_HOST").unwrap_or_else(|| "localhost".to_string());
    let port = var("DB_PORT").unwrap_or_else(|| "5432".to_string());
    let user = var("DB_USER").unwrap_or_else(|| "postgres".to_string());
    let password = var("DB_PASSWORD").unwrap_or_default();
    let name = var("DB_NAME").unwrap_or_else(|| "cashier_db".to_string());
    let ssl_mode = var("DB_SSL_MODE").unwrap_or_else(|| "disable".to_string());
    format!("postgres://{user}:{password}@{host}:{port}/{name}?sslmode={ssl_mode}")
}

fn parse_or<T>(var: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        None => Ok(default),
    }
}
