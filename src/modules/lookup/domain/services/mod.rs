pub mod filter_builder;
pub mod query_classifier;
pub mod relevance_scorer;
pub mod text_processor;

pub use filter_builder::FilterBuilder;
pub use query_classifier::{QueryClassifier, MIN_CODE_DIGITS};
pub use relevance_scorer::{RelevanceScorer, ScoringConfig, MAX_RESULTS};
pub use text_processor::{TextNormalizer, TextProcessorConfig, Tokenizer};
