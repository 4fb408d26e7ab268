use anyhow::{Context, Result};
use config::{Config, Environment, File};
use sea_orm::{Database, DatabaseConnection};
use serde::Deserialize;
use tracing::{debug, error, info};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://userseed.db?mode=rwc";
pub const DEFAULT_LOG_FILTER: &str = "userseed=info,sea_orm=warn";

/// Runtime settings, read from `userseed.toml` and `USERSEED_*` variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from the optional config file and the environment.
    pub fn load() -> Result<Self> {
        Self::from_sources("userseed")
    }

    fn from_sources(file_stem: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(file_stem).required(false))
            .add_source(Environment::with_prefix("USERSEED"))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;
        Ok(settings)
    }
}

/// Open a connection to the user store.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Database URL: {}", database_url);
    match Database::connect(database_url).await {
        Ok(connection) => {
            info!("Successfully connected to database");
            Ok(connection)
        }
        Err(e) => {
            error!("Failed to connect to database '{}': {}", database_url, e);
            Err(e).with_context(|| format!("Failed to connect to database '{}'", database_url))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let settings = Settings::from_sources("definitely-missing-userseed-config").unwrap();
        assert!(!settings.database_url.is_empty());
        assert!(!settings.log_filter.is_empty());
    }

    #[test]
    fn test_default_impl() {
        let settings = Settings::default();
        assert_eq!(settings.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
    }
}
