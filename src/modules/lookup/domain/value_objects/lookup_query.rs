use serde::Serialize;

/// A classified lookup request. Built once by the query classifier and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupQuery {
    /// Raw free-text input, trimmed
    pub raw: String,
    /// Digit-only code fragment; empty unless the input is code-like
    pub code_query: String,
    /// Whitespace-collapsed name text; empty for code lookups
    pub name_query: String,
    /// Normalized, stopword-free, plural-folded tokens of `name_query`.
    /// Uncapped; the filter builder bounds its own fan-out.
    pub tokens: Vec<String>,
    /// Same as `tokens` but without the plural fold
    pub surface_tokens: Vec<String>,
}

impl LookupQuery {
    pub fn is_code_like(&self) -> bool {
        !self.code_query.is_empty()
    }

    /// Short label used in logs
    pub fn kind(&self) -> &'static str {
        if self.is_code_like() {
            "code"
        } else {
            "name"
        }
    }
}
