use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the candidate filter sent to the store is shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Code: equality or substring. Name: literal, no-space and token
    /// conjunction predicates.
    #[default]
    Structured,
    /// Code: substring only. Name: flat disjunction of per-token predicates.
    Legacy,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Structured => "structured",
            FilterMode::Legacy => "legacy",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "structured" => Ok(FilterMode::Structured),
            "legacy" => Ok(FilterMode::Legacy),
            other => Err(format!(
                "Unknown filter mode '{}'. Must be one of: structured, legacy",
                other
            )),
        }
    }
}
