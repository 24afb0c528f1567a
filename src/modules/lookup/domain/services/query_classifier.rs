use std::sync::Arc;

use crate::modules::lookup::domain::value_objects::LookupQuery;
use crate::shared::errors::{AppError, AppResult};

use super::text_processor::Tokenizer;

/// Minimum digits a bare free-text query needs to be read as a code
pub const MIN_CODE_DIGITS: usize = 4;

/// Decides between code and name lookups.
///
/// Resolution order: explicit code parameter, explicit name parameter, then
/// the free-text heuristic. A free-text input is a code only when it is made
/// of at least `MIN_CODE_DIGITS` digits and nothing else besides whitespace;
/// anything mixing letters and digits is a name.
pub struct QueryClassifier {
    tokenizer: Arc<Tokenizer>,
    min_code_digits: usize,
}

impl QueryClassifier {
    pub fn new(tokenizer: Arc<Tokenizer>) -> Self {
        Self {
            tokenizer,
            min_code_digits: MIN_CODE_DIGITS,
        }
    }

    pub fn classify(
        &self,
        raw: &str,
        explicit_code: Option<&str>,
        explicit_name: Option<&str>,
    ) -> AppResult<LookupQuery> {
        let raw = raw.trim();
        let explicit_code = explicit_code.map(str::trim).filter(|s| !s.is_empty());
        let explicit_name = explicit_name.map(str::trim).filter(|s| !s.is_empty());

        let (code_query, name_query) = if let Some(code) = explicit_code {
            (digits_of(code), String::new())
        } else if let Some(name) = explicit_name {
            (String::new(), collapse_whitespace(name))
        } else {
            let digits = digits_of(raw);
            let no_space: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

            if digits.len() >= self.min_code_digits && digits == no_space {
                (digits, String::new())
            } else {
                (String::new(), collapse_whitespace(raw))
            }
        };

        if code_query.is_empty() && name_query.is_empty() {
            return Err(AppError::InvalidInput(
                if explicit_code.is_some() {
                    "O GTIN informado não contém dígitos"
                } else {
                    "Informe um termo de busca"
                }
                .to_string(),
            ));
        }

        let (tokens, surface_tokens) = if name_query.is_empty() {
            (Vec::new(), Vec::new())
        } else {
            (
                self.tokenizer.tokenize(&name_query),
                self.tokenizer.surface_tokens(&name_query),
            )
        };

        log::debug!(
            "CLASSIFIER: '{}' -> code='{}' name='{}' tokens={:?}",
            raw,
            code_query,
            name_query,
            tokens
        );

        Ok(LookupQuery {
            raw: raw.to_string(),
            code_query,
            name_query,
            tokens,
            surface_tokens,
        })
    }
}

fn digits_of(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}
