use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_DATABASE_NAME: &str = "inspiration";

#[derive(Debug, Clone, Deserialize)]
pub struct InspirationConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl DatabaseConfig {
    pub fn database_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_DATABASE_NAME)
    }
}

impl InspirationConfig {
    /// Both store variables are optional: a missing DATABASE_URL leaves
    /// the store handle unavailable instead of failing startup.
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(InspirationConfig {
            common,
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").ok(),
                name: env::var("DATABASE_NAME").ok(),
            },
        })
    }
}
