use std::sync::Arc;

use crate::modules::lookup::domain::{
    repositories::{CatalogStore, CANDIDATE_PAGE_SIZE},
    services::{
        FilterBuilder, QueryClassifier, RelevanceScorer, ScoringConfig, TextProcessorConfig,
        Tokenizer,
    },
    value_objects::FilterMode,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LookupTrace;

use super::dto::{LookupRequest, LookupResponse};

/// Settings for the lookup pipeline
#[derive(Debug, Clone, Default)]
pub struct LookupSettings {
    pub filter_mode: FilterMode,
    pub text: TextProcessorConfig,
    pub scoring: ScoringConfig,
}

impl LookupSettings {
    pub fn with_filter_mode(mut self, mode: FilterMode) -> Self {
        self.filter_mode = mode;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        self.text.validate()?;
        self.scoring.validate()
    }
}

/// Application service for product lookups
///
/// Runs one stateless pass per request:
/// classify → build filter → query store → score & rank.
/// Nothing is shared between requests besides the immutable pipeline parts.
pub struct LookupService {
    store: Arc<dyn CatalogStore>,
    classifier: QueryClassifier,
    filter_builder: FilterBuilder,
    scorer: RelevanceScorer,
}

impl LookupService {
    /// Create a new service with default settings
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self::build(store, LookupSettings::default())
    }

    /// Create a new service with custom settings
    pub fn with_settings(
        store: Arc<dyn CatalogStore>,
        settings: LookupSettings,
    ) -> AppResult<Self> {
        settings.validate().map_err(AppError::ConfigError)?;
        Ok(Self::build(store, settings))
    }

    fn build(store: Arc<dyn CatalogStore>, settings: LookupSettings) -> Self {
        let tokenizer = Arc::new(Tokenizer::new(&settings.text));

        Self {
            store,
            classifier: QueryClassifier::new(tokenizer.clone()),
            filter_builder: FilterBuilder::new(settings.filter_mode, tokenizer),
            scorer: RelevanceScorer::new(settings.scoring),
        }
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filter_builder.mode()
    }

    pub async fn lookup(&self, request: &LookupRequest) -> AppResult<LookupResponse> {
        let raw = request.q.as_deref().unwrap_or_default();
        let query = self
            .classifier
            .classify(raw, request.gtin.as_deref(), request.name.as_deref())?;

        let trace = LookupTrace::start(&query.raw, query.kind());
        let filter = self.filter_builder.build(&query);
        let store_name = self.store.store_name();

        let candidates = match self.store.query(&filter, CANDIDATE_PAGE_SIZE).await {
            Ok(candidates) => candidates,
            Err(e) => {
                trace.store_failed(store_name, &e);
                return Err(e);
            }
        };
        trace.candidates(store_name, candidates.len());

        let ranked = self.scorer.rank(&query, candidates);
        trace.finish(ranked.len());

        Ok(LookupResponse::from_ranked(ranked))
    }
}
