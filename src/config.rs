use crate::error::{AppError, AppResult};
use dotenvy::dotenv;
use sqlx::mysql::MySqlConnectOptions;
use std::{env, str::FromStr, time::Duration};

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub database: DatabaseConfig,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source, so parsing can be exercised
    /// without mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::Config(format!("Missing environment variable '{name}'")))
        };
        let or_default = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let database = DatabaseConfig {
            host: required("DB_HOST")?,
            port: parse("DB_PORT", &or_default("DB_PORT", "3306"))?,
            user: required("DB_USER")?,
            password: or_default("DB_PASS", ""),
            name: required("DB_NAME")?,
            max_connections: parse("DB_MAX_CONNECTIONS", &or_default("DB_MAX_CONNECTIONS", "2"))?,
            connect_timeout: Duration::from_secs(parse(
                "DB_CONNECT_TIMEOUT_SECS",
                &or_default("DB_CONNECT_TIMEOUT_SECS", "10"),
            )?),
        };

        let config = Self {
            server_host: or_default("SERVER_HOST", "0.0.0.0"),
            server_port: parse("SERVER_PORT", &or_default("SERVER_PORT", "3000"))?,
            database,
            run_migrations: parse("RUN_MIGRATIONS", &or_default("RUN_MIGRATIONS", "false"))?,
        };

        tracing::debug!(
            db_host = %config.database.host,
            db_name = %config.database.name,
            max_connections = config.database.max_connections,
            "configuration loaded"
        );

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse<T>(name: &str, raw: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid {name} '{raw}': {e}")))
}
