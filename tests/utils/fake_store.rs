/// In-memory catalog store
///
/// Evaluates filter trees the way the hosted catalog does: case-insensitive
/// substring and exact matches over the record's text fields.
use async_trait::async_trait;
use prateleira_lib::modules::lookup::domain::{
    CandidateRecord, CatalogField, CatalogStore, FilterExpression,
};
use prateleira_lib::shared::errors::{AppError, AppResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct InMemoryCatalogStore {
    records: Vec<CandidateRecord>,
    failure: Option<AppError>,
    calls: AtomicUsize,
    last_filter: Mutex<Option<FilterExpression>>,
}

impl InMemoryCatalogStore {
    pub fn new(records: Vec<CandidateRecord>) -> Self {
        Self {
            records,
            failure: None,
            calls: AtomicUsize::new(0),
            last_filter: Mutex::new(None),
        }
    }

    /// A store whose every query fails with `error`
    pub fn failing(error: AppError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new(vec![])
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_filter(&self) -> Option<FilterExpression> {
        self.last_filter.lock().unwrap().clone()
    }

    fn matches(record: &CandidateRecord, filter: &FilterExpression) -> bool {
        match filter {
            FilterExpression::Contains { field, value } => Self::field_text(record, *field)
                .map(|text| text.to_lowercase().contains(&value.to_lowercase()))
                .unwrap_or(false),
            FilterExpression::Equals { field, value } => Self::field_text(record, *field)
                .map(|text| text.to_lowercase() == value.to_lowercase())
                .unwrap_or(false),
            FilterExpression::All { children } => {
                children.iter().all(|child| Self::matches(record, child))
            }
            FilterExpression::Any { children } => {
                children.iter().any(|child| Self::matches(record, child))
            }
        }
    }

    fn field_text(record: &CandidateRecord, field: CatalogField) -> Option<&str> {
        match field {
            CatalogField::Name => Some(record.display_name.as_str()),
            CatalogField::Code => record.code.as_deref(),
            CatalogField::Price | CatalogField::Image => None,
        }
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    fn store_name(&self) -> &'static str {
        "in-memory"
    }

    async fn query(
        &self,
        filter: &FilterExpression,
        page_size: usize,
    ) -> AppResult<Vec<CandidateRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_filter.lock().unwrap() = Some(filter.clone());

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        Ok(self
            .records
            .iter()
            .filter(|record| Self::matches(record, filter))
            .take(page_size)
            .cloned()
            .collect())
    }
}
