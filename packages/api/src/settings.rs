//! # Runtime settings
//!
//! Layered configuration read once at startup:
//!
//! 1. built-in defaults,
//! 2. an optional `config.toml` in the working directory,
//! 3. environment variables (after an optional `.env` is loaded via `dotenvy`).
//!
//! Environment keys use `_` as the nesting separator, so `SECRET_KEY` maps to
//! `secret.key`, `DATABASE_URL` to `database.url` and `SERVER_PORT` to
//! `server.port`.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Placeholder signing secret used when `SECRET_KEY` is not configured.
pub const DEFAULT_SECRET_KEY: &str = "change-me-hospital-dev-secret";

/// Local file-backed database used when `DATABASE_URL` is not configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://hospital.db";

#[derive(Debug, Deserialize)]
pub struct Secret {
    pub key: String,
}

#[derive(Debug, Deserialize)]
pub struct Database {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub secret: Secret,
    pub database: Database,
    pub server: Server,
}

impl Settings {
    /// Load settings from defaults, `config.toml` and the process environment.
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::build(Environment::default())
    }

    fn build(environment: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("secret.key", DEFAULT_SECRET_KEY)?
            .set_default("database.url", DEFAULT_DATABASE_URL)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(environment.separator("_").try_parsing(true))
            .build()?;

        config.try_deserialize()
    }

    /// Whether the session signing secret is still the built-in placeholder.
    pub fn uses_default_secret(&self) -> bool {
        self.secret.key == DEFAULT_SECRET_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::default().source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::build(environment(&[])).unwrap();
        assert_eq!(settings.database.url, DEFAULT_DATABASE_URL);
        assert_eq!(settings.server.address(), "127.0.0.1:8080");
        assert!(settings.uses_default_secret());
    }

    #[test]
    fn test_environment_overrides() {
        let settings = Settings::build(environment(&[
            ("SECRET_KEY", "s3cret"),
            ("DATABASE_URL", "sqlite://other.db"),
            ("SERVER_PORT", "9000"),
        ]))
        .unwrap();
        assert_eq!(settings.secret.key, "s3cret");
        assert_eq!(settings.database.url, "sqlite://other.db");
        assert_eq!(settings.server.port, 9000);
        assert!(!settings.uses_default_secret());
    }
}
