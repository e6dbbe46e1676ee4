mod basic;
mod database;

pub use basic::BasicConfig;
pub use database::DatabaseConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Connection pool settings (see `database` table in config.toml).
    #[serde(default)]
    pub database: DatabaseConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";

impl Config {
    /// Builds a Figment that merges defaults, an optional `config.toml`, and the process
    /// environment, in that order of precedence.
    ///
    /// Recognized variables: `DATABASE_URL`, `PORT`, `LISTEN_ADDR`, `LOGLEVEL`.
    pub fn figment() -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
        }
        figment.merge(Env::raw().filter_map(|key| {
            match key.as_str().to_ascii_uppercase().as_str() {
                "DATABASE_URL" => Some("basic.database_url".into()),
                "PORT" => Some("basic.listen_port".into()),
                "LISTEN_ADDR" => Some("basic.listen_addr".into()),
                "LOGLEVEL" => Some("basic.loglevel".into()),
                _ => None,
            }
        }))
    }

    /// Loads and validates configuration.
    pub fn load() -> Result<Self, figment::Error> {
        let cfg: Self = Self::figment().extract()?;
        if cfg.basic.database_url.trim().is_empty() {
            return Err(figment::Error::from(
                "basic.database_url must be set and non-empty".to_string(),
            ));
        }
        if cfg.database.min_connections > cfg.database.max_connections {
            return Err(figment::Error::from(format!(
                "database.min_connections ({}) exceeds database.max_connections ({})",
                cfg.database.min_connections, cfg.database.max_connections
            )));
        }
        Ok(cfg)
    }
}
