use std::sync::Arc;

use crate::modules::lookup::domain::value_objects::{
    CatalogField, FilterExpression, FilterMode, LookupQuery,
};

use super::text_processor::Tokenizer;

/// Builds the broad candidate filter handed to the catalog store.
///
/// Recall over precision: the filter only narrows the catalog down to a page
/// of plausible candidates, the relevance scorer decides what is shown.
pub struct FilterBuilder {
    mode: FilterMode,
    tokenizer: Arc<Tokenizer>,
}

impl FilterBuilder {
    pub fn new(mode: FilterMode, tokenizer: Arc<Tokenizer>) -> Self {
        Self { mode, tokenizer }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn build(&self, query: &LookupQuery) -> FilterExpression {
        let filter = if query.is_code_like() {
            self.code_filter(&query.code_query)
        } else if query.tokens.is_empty() {
            self.fallback_filter(query)
        } else {
            match self.mode {
                FilterMode::Structured => self.structured_name_filter(query),
                FilterMode::Legacy => self.legacy_name_filter(query),
            }
        };

        log::debug!(
            "FILTER: {} mode, {} predicates for '{}'",
            self.mode,
            filter.predicate_count(),
            query.raw
        );

        filter
    }

    fn code_filter(&self, code: &str) -> FilterExpression {
        match self.mode {
            FilterMode::Structured => FilterExpression::any_of(vec![
                FilterExpression::equals(CatalogField::Code, code),
                FilterExpression::contains(CatalogField::Code, code),
            ]),
            FilterMode::Legacy => FilterExpression::contains(CatalogField::Code, code),
        }
    }

    /// Literal text, its no-space form, then token conjunctions
    fn structured_name_filter(&self, query: &LookupQuery) -> FilterExpression {
        let name = &query.name_query;
        let mut predicates = vec![FilterExpression::contains(CatalogField::Name, name.as_str())];

        let no_space: String = name.chars().filter(|c| !c.is_whitespace()).collect();
        if no_space != *name {
            predicates.push(FilterExpression::contains(CatalogField::Name, no_space));
        }

        let tokens = self.tokenizer.cap(&query.tokens);
        let surface_tokens = self.tokenizer.cap(&query.surface_tokens);

        if surface_tokens.len() >= 2 {
            predicates.push(token_conjunction(surface_tokens));
            if tokens != surface_tokens {
                predicates.push(token_conjunction(tokens));
            }
        }

        if let [token] = tokens {
            predicates.push(FilterExpression::contains(CatalogField::Name, token.as_str()));
        }

        let mut unique: Vec<FilterExpression> = Vec::with_capacity(predicates.len());
        for predicate in predicates {
            if !unique.contains(&predicate) {
                unique.push(predicate);
            }
        }

        FilterExpression::any_of(unique)
    }

    /// Any single token may match
    fn legacy_name_filter(&self, query: &LookupQuery) -> FilterExpression {
        FilterExpression::any_of(
            self.tokenizer
                .cap(&query.tokens)
                .iter()
                .map(|t| FilterExpression::contains(CatalogField::Name, t.as_str()))
                .collect(),
        )
    }

    /// Used when the name left no tokens, e.g. stopwords only
    fn fallback_filter(&self, query: &LookupQuery) -> FilterExpression {
        let normalized = self.tokenizer.normalizer().normalize(&query.name_query);
        let text = if normalized.is_empty() {
            query.name_query.clone()
        } else {
            normalized
        };
        FilterExpression::contains(CatalogField::Name, text)
    }
}

fn token_conjunction(tokens: &[String]) -> FilterExpression {
    FilterExpression::all_of(
        tokens
            .iter()
            .map(|t| FilterExpression::contains(CatalogField::Name, t.as_str()))
            .collect(),
    )
}
