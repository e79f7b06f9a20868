//! Service configuration.
//!
//! Values come from CLI flags or the environment (an optional `.env` file is
//! loaded first). `DATABASE_URL` wins over the individual `DB_*` parts.

use std::str::FromStr;

use clap::{Parser, ValueEnum};
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use thiserror::Error;

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StorageDriver {
    /// Process-local map, lost on restart.
    #[default]
    Memory,
    Postgres,
}

impl StorageDriver {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Postgres => "postgres",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing database setting {0} (or set DATABASE_URL)")]
    MissingDatabaseSetting(&'static str),

    #[error("invalid DATABASE_URL: {0}")]
    InvalidDatabaseUrl(String),
}

/// Product catalog service configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-api", about = "Product catalog HTTP service", long_about = None)]
pub struct Settings {
    /// Server host address
    #[arg(long, env = "WEB_SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "WEB_SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Storage backend
    #[arg(long, env = "DB_DRIVER", value_enum, default_value_t = StorageDriver::Memory)]
    pub db_driver: StorageDriver,

    #[arg(long, env = "DB_HOST")]
    pub db_host: Option<String>,

    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    #[arg(long, env = "DB_USER")]
    pub db_user: Option<String>,

    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    #[arg(long, env = "DB_NAME")]
    pub db_name: Option<String>,

    /// Full connection string; overrides the `DB_*` parts
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Upper bound for the Postgres pool
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub db_max_connections: u32,
}

impl Settings {
    /// Load configuration from environment and CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Postgres connection options.
    ///
    /// The `DB_*` parts are passed through as discrete fields, so credentials
    /// never need URL escaping.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = self.database_url.as_deref().filter(|u| !u.is_empty()) {
            return PgConnectOptions::from_str(url)
                .map_err(|e| ConfigError::InvalidDatabaseUrl(e.to_string()));
        }

        let host = required(&self.db_host, "DB_HOST")?;
        let user = required(&self.db_user, "DB_USER")?;
        let name = required(&self.db_name, "DB_NAME")?;

        let mut options = PgConnectOptions::new()
            .host(host)
            .port(self.db_port)
            .username(user)
            .database(name)
            .ssl_mode(PgSslMode::Disable);
        if let Some(password) = self.db_password.as_deref() {
            options = options.password(password);
        }
        Ok(options)
    }
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str, ConfigError> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingDatabaseSetting(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            host: "0.0.0.0".to_string(),
            port: 8000,
            db_driver: StorageDriver::Postgres,
            db_host: Some("localhost".to_string()),
            db_port: 5432,
            db_user: Some("catalog".to_string()),
            db_password: Some("secret".to_string()),
            db_name: Some("products".to_string()),
            database_url: None,
            db_max_connections: 10,
        }
    }

    #[test]
    fn flags_override_defaults() {
        let settings = Settings::try_parse_from([
            "catalog-api",
            "--host",
            "127.0.0.1",
            "--port",
            "9090",
            "--db-driver",
            "postgres",
        ])
        .unwrap();

        assert_eq!(settings.socket_addr(), "127.0.0.1:9090");
        assert_eq!(settings.db_driver, StorageDriver::Postgres);
    }

    #[test]
    fn unknown_driver_is_rejected() {
        assert!(Settings::try_parse_from(["catalog-api", "--db-driver", "mysql"]).is_err());
    }

    #[test]
    fn connect_options_come_from_parts() {
        let options = settings().connect_options().unwrap();
        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "catalog");
        assert_eq!(options.get_database(), Some("products"));
    }

    #[test]
    fn reserved_characters_in_password_do_not_leak_into_host() {
        let mut settings = settings();
        settings.db_password = Some("p@ss/w#rd:1".to_string());

        let options = settings.connect_options().unwrap();
        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "catalog");
        assert_eq!(options.get_database(), Some("products"));
    }

    #[test]
    fn explicit_database_url_wins() {
        let mut settings = settings();
        settings.database_url = Some("postgres://app:pw@elsewhere:6543/db".to_string());
        settings.db_host = None;

        let options = settings.connect_options().unwrap();
        assert_eq!(options.get_host(), "elsewhere");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("db"));
    }

    #[test]
    fn malformed_database_url_is_rejected() {
        let mut settings = settings();
        settings.database_url = Some("not a url".to_string());
        assert!(matches!(
            settings.connect_options(),
            Err(ConfigError::InvalidDatabaseUrl(_))
        ));
    }

    #[test]
    fn missing_part_is_reported() {
        let mut settings = settings();
        settings.db_name = None;
        assert!(matches!(
            settings.connect_options(),
            Err(ConfigError::MissingDatabaseSetting("DB_NAME"))
        ));
    }
}
