use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;

use super::{
    dto::{NotionQueryRequest, NotionQueryResponse},
    mapper::NotionMapper,
};
use crate::modules::lookup::domain::{
    CandidateRecord, CatalogSchema, CatalogStore, FilterExpression,
};
use crate::modules::lookup::infrastructure::external::common::CommonHttpHandler;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;

pub const DEFAULT_BASE_URL: &str = "https://api.notion.com";
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = "Prateleira-Lookup/1.0";

/// Connection settings for a Notion database
#[derive(Debug, Clone)]
pub struct NotionSettings {
    pub token: String,
    pub database_id: String,
    pub base_url: String,
    pub version: String,
    pub timeout_secs: u64,
}

impl NotionSettings {
    pub fn new(token: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            database_id: database_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            version: DEFAULT_NOTION_VERSION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.token.trim().is_empty() {
            return Err("Notion token must not be empty".to_string());
        }
        if self.database_id.trim().is_empty() {
            return Err("Notion database id must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("Notion timeout must be greater than 0".to_string());
        }
        Ok(())
    }

    fn query_url(&self) -> String {
        format!(
            "{}/v1/databases/{}/query",
            self.base_url.trim_end_matches('/'),
            self.database_id
        )
    }
}

/// Catalog store backed by a Notion database
pub struct NotionClient {
    client: Client,
    settings: NotionSettings,
    schema: Arc<CatalogSchema>,
}

impl NotionClient {
    pub fn new(settings: NotionSettings, schema: Arc<CatalogSchema>) -> AppResult<Self> {
        settings.validate().map_err(AppError::ConfigError)?;
        schema.validate().map_err(AppError::ConfigError)?;

        let client = CommonHttpHandler::create_http_client(settings.timeout_secs, USER_AGENT)?;

        Ok(Self {
            client,
            settings,
            schema,
        })
    }

    pub fn schema(&self) -> &CatalogSchema {
        &self.schema
    }
}

#[async_trait]
impl CatalogStore for NotionClient {
    fn store_name(&self) -> &'static str {
        "Notion"
    }

    async fn query(
        &self,
        filter: &FilterExpression,
        page_size: usize,
    ) -> AppResult<Vec<CandidateRecord>> {
        let request = NotionQueryRequest {
            page_size,
            filter: NotionMapper::filter_to_json(filter, &self.schema)?,
        };
        let url = self.settings.query_url();

        tracing::debug!(
            "Notion query with {} predicates: {}",
            filter.predicate_count(),
            request.filter
        );

        let started = Instant::now();
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.settings.token)
            .header("Notion-Version", self.settings.version.as_str())
            .json(&request)
            .send()
            .await?;

        let (status, body) = CommonHttpHandler::read_json_body(response).await?;
        LogContext::upstream_call(
            self.store_name(),
            "databases.query",
            status.as_str(),
            started.elapsed().as_millis() as u64,
        );

        CommonHttpHandler::ensure_success(status, &body, self.store_name())?;

        let parsed: NotionQueryResponse = serde_json::from_value(body)?;
        if parsed.has_more {
            tracing::debug!(
                "Notion returned a full page of {} results; further pages are not fetched",
                parsed.results.len()
            );
        }

        Ok(NotionMapper::to_candidates(&parsed.results, &self.schema))
    }
}
