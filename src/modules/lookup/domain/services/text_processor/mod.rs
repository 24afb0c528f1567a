/// Text processing for product lookups.
///
/// - **Configuration**: `TextProcessorConfig` externalizes the stopword list and
///   token thresholds
/// - **Normalization**: `TextNormalizer` composes `TextTransformation`s
///   (lowercase, diacritic stripping, punctuation collapsing)
/// - **Tokenization**: `Tokenizer` turns normalized text into matching units
///
/// # Usage
///
/// ```rust
/// use prateleira_lib::modules::lookup::domain::services::text_processor::*;
///
/// let tokenizer = Tokenizer::new(&TextProcessorConfig::default());
/// assert_eq!(tokenizer.tokenize("Biscoitos de Polvilho"), vec!["biscoito", "polvilho"]);
/// ```
pub mod config;
pub mod normalizer;
pub mod tokenizer;

// Re-export main types
pub use config::{TextProcessorConfig, TextProcessorConfigBuilder};
pub use normalizer::{
    LowercaseTransform, NormalizeWhitespaceTransform, ReplaceNonAlphanumericTransform,
    StripDiacriticsTransform, TextNormalizer, TextTransformation,
};
pub use tokenizer::Tokenizer;
