use serde::{Deserialize, Serialize};

use crate::modules::lookup::domain::{CandidateRecord, ScoredCandidate};

/// Item shown to the end user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupItem {
    pub name: String,
    pub preco: Option<f64>,
    pub img: Option<String>,
    pub gtin: Option<String>,
}

impl From<CandidateRecord> for LookupItem {
    fn from(record: CandidateRecord) -> Self {
        Self {
            name: record.display_name,
            preco: record.price,
            img: record.image_url,
            gtin: record.code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResponse {
    pub found: bool,
    pub items: Vec<LookupItem>,
}

impl LookupResponse {
    pub fn not_found() -> Self {
        Self {
            found: false,
            items: Vec::new(),
        }
    }

    pub fn from_ranked(ranked: Vec<ScoredCandidate>) -> Self {
        if ranked.is_empty() {
            return Self::not_found();
        }

        Self {
            found: true,
            items: ranked.into_iter().map(|c| c.record.into()).collect(),
        }
    }
}
