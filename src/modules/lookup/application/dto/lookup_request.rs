use serde::{Deserialize, Serialize};

/// Query-string parameters of a lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupRequest {
    /// Free text: a product name or a partial barcode
    #[serde(default)]
    pub q: Option<String>,
    /// Explicit code; wins over `name` and `q`
    #[serde(default)]
    pub gtin: Option<String>,
    /// Explicit name; wins over `q`
    #[serde(default)]
    pub name: Option<String>,
}

impl LookupRequest {
    pub fn free_text(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Default::default()
        }
    }
}
