/// Configuration for query and candidate text processing
///
/// Externalizes the stopword list and the token thresholds so the tokenizer
/// can be tuned and tested without touching its logic.
#[derive(Debug, Clone)]
pub struct TextProcessorConfig {
    /// Words dropped from queries (Portuguese articles, prepositions,
    /// conjunctions and their contractions)
    pub stop_words: Vec<String>,

    /// Tokens shorter than this are discarded
    pub min_token_length: usize,

    /// Tokens ending in "s" are folded to singular only from this length up
    pub plural_fold_min_length: usize,

    /// Tokens kept per query, bounding filter fan-out
    pub max_tokens: usize,
}

impl TextProcessorConfig {
    pub fn new() -> Self {
        Self {
            stop_words: [
                "de", "da", "do", "das", "dos", "para", "pra", "com", "sem", "um", "uma", "uns",
                "umas", "e", "a", "o", "as", "os", "no", "na", "nos", "nas", "ao", "aos",
            ]
            .iter()
            .map(|w| w.to_string())
            .collect(),
            min_token_length: 2,
            plural_fold_min_length: 4,
            max_tokens: 8,
        }
    }

    /// Creates a minimal configuration for testing
    #[cfg(test)]
    pub fn minimal() -> Self {
        Self {
            stop_words: vec![],
            min_token_length: 1,
            plural_fold_min_length: 4,
            max_tokens: 8,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.min_token_length == 0 {
            return Err("min_token_length must be at least 1".to_string());
        }

        // "s" alone must never fold to an empty token
        if self.plural_fold_min_length < 2 {
            return Err(format!(
                "plural_fold_min_length must be at least 2, got {}",
                self.plural_fold_min_length
            ));
        }

        if self.max_tokens == 0 {
            return Err("max_tokens must be at least 1".to_string());
        }

        Ok(())
    }
}

impl Default for TextProcessorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for TextProcessorConfig
pub struct TextProcessorConfigBuilder {
    config: TextProcessorConfig,
}

impl TextProcessorConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: TextProcessorConfig::default(),
        }
    }

    pub fn stop_words(mut self, words: Vec<String>) -> Self {
        self.config.stop_words = words;
        self
    }

    pub fn min_token_length(mut self, length: usize) -> Self {
        self.config.min_token_length = length;
        self
    }

    pub fn plural_fold_min_length(mut self, length: usize) -> Self {
        self.config.plural_fold_min_length = length;
        self
    }

    pub fn max_tokens(mut self, max: usize) -> Self {
        self.config.max_tokens = max;
        self
    }

    pub fn build(self) -> Result<TextProcessorConfig, String> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for TextProcessorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
