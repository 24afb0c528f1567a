use serde::{Deserialize, Serialize};

/// Catalog item as projected from a store page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub display_name: String,
    pub code: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

impl CandidateRecord {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            code: None,
            price: None,
            image_url: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Digits of the product code, formatting characters dropped
    pub fn code_digits(&self) -> String {
        self.code
            .as_deref()
            .unwrap_or_default()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect()
    }
}

/// A candidate paired with its relevance score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub record: CandidateRecord,
    pub score: u32,
}
