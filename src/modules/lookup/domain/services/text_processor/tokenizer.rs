use std::collections::HashSet;

use super::config::TextProcessorConfig;
use super::normalizer::TextNormalizer;

/// Splits text into coarse matching units.
///
/// Tokens are normalized, at least `min_token_length` long, never stopwords
/// and deduplicated in first-seen order. `cap` bounds how many of them feed
/// the store filter.
pub struct Tokenizer {
    normalizer: TextNormalizer,
    stop_words: HashSet<String>,
    min_token_length: usize,
    plural_fold_min_length: usize,
    max_tokens: usize,
}

impl Tokenizer {
    pub fn new(config: &TextProcessorConfig) -> Self {
        Self {
            normalizer: TextNormalizer::default_pipeline(),
            stop_words: config.stop_words.iter().cloned().collect(),
            min_token_length: config.min_token_length,
            plural_fold_min_length: config.plural_fold_min_length,
            max_tokens: config.max_tokens,
        }
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Tokens with the plural fold applied
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let folded = self
            .candidate_words(text)
            .into_iter()
            .map(|word| self.fold_plural(&word))
            .filter(|word| !self.is_stop_word(word));
        dedup(folded)
    }

    /// Tokens as typed, without the plural fold
    pub fn surface_tokens(&self, text: &str) -> Vec<String> {
        dedup(self.candidate_words(text).into_iter())
    }

    /// Leading `max_tokens` tokens
    pub fn cap<'a>(&self, tokens: &'a [String]) -> &'a [String] {
        &tokens[..tokens.len().min(self.max_tokens)]
    }

    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    /// Naive plural→singular fold: "produtos" → "produto".
    ///
    /// Linguistically naive; "lapis" becomes "lapi".
    pub fn fold_plural(&self, token: &str) -> String {
        if token.chars().count() >= self.plural_fold_min_length && token.ends_with('s') {
            token[..token.len() - 1].to_string()
        } else {
            token.to_string()
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    fn candidate_words(&self, text: &str) -> Vec<String> {
        self.normalizer
            .normalize(text)
            .split_whitespace()
            .filter(|word| word.chars().count() >= self.min_token_length)
            .filter(|word| !self.is_stop_word(word))
            .map(str::to_string)
            .collect()
    }

}

fn dedup(words: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    words.filter(|word| seen.insert(word.clone())).collect()
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&TextProcessorConfig::default())
    }
}
