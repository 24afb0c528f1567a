use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Body of `POST /v1/databases/{id}/query`
#[derive(Debug, Clone, Serialize)]
pub struct NotionQueryRequest {
    pub page_size: usize,
    pub filter: Value,
}

/// Database query response; only the fields we project are modelled
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotionQueryResponse {
    #[serde(default)]
    pub results: Vec<NotionPage>,
    #[serde(default)]
    pub has_more: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotionPage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub properties: HashMap<String, NotionProperty>,
}

/// A page property. Notion tags each property with its `type`; the payload
/// sits under a key of the same name, so every known shape is optional here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotionProperty {
    pub title: Option<Vec<NotionRichText>>,
    pub rich_text: Option<Vec<NotionRichText>>,
    pub number: Option<f64>,
    pub files: Option<Vec<NotionFile>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotionRichText {
    #[serde(default)]
    pub plain_text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotionFile {
    pub file: Option<NotionFileUrl>,
    pub external: Option<NotionFileUrl>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotionFileUrl {
    pub url: String,
}
