use std::net::SocketAddr;

use crate::modules::lookup::domain::{CatalogField, CatalogSchema, FilterMode};
use crate::modules::lookup::infrastructure::external::notion::client::{
    NotionSettings, DEFAULT_BASE_URL, DEFAULT_NOTION_VERSION, DEFAULT_TIMEOUT_SECS,
};
use crate::modules::lookup::LookupSettings;
use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Process configuration assembled from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub notion: NotionSettings,
    pub schema: CatalogSchema,
    pub lookup: LookupSettings,
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &str| {
            var(key).ok_or_else(|| AppError::ConfigError(format!("{} is not set", key)))
        };

        let token = required("NOTION_TOKEN")?;
        let database_id = required("NOTION_DB_ID")?;

        let timeout_secs = match var("NOTION_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::ConfigError(format!(
                    "NOTION_TIMEOUT_SECS must be a number, got '{}'",
                    raw
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let notion = NotionSettings {
            token,
            database_id,
            base_url: var("NOTION_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            version: var("NOTION_VERSION").unwrap_or_else(|| DEFAULT_NOTION_VERSION.to_string()),
            timeout_secs,
        };
        notion.validate().map_err(AppError::ConfigError)?;

        let bind_raw = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|_| {
            AppError::ConfigError(format!("BIND_ADDR is not a socket address: '{}'", bind_raw))
        })?;

        let filter_mode = match var("LOOKUP_FILTER_MODE") {
            Some(raw) => raw.parse::<FilterMode>().map_err(AppError::ConfigError)?,
            None => FilterMode::default(),
        };

        let mut schema = CatalogSchema::default();
        for (key, field) in [
            ("CATALOG_FIELD_NAME", CatalogField::Name),
            ("CATALOG_FIELD_CODE", CatalogField::Code),
            ("CATALOG_FIELD_PRICE", CatalogField::Price),
            ("CATALOG_FIELD_IMAGE", CatalogField::Image),
        ] {
            if let Some(list) = var(key) {
                schema = schema.with_field(field, list.split(',').map(str::to_string).collect());
            }
        }
        schema.validate().map_err(AppError::ConfigError)?;

        let lookup = LookupSettings::default().with_filter_mode(filter_mode);
        lookup.validate().map_err(AppError::ConfigError)?;

        Ok(Self {
            bind_addr,
            notion,
            schema,
            lookup,
        })
    }
}
