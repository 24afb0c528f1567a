use async_trait::async_trait;

use crate::{
    modules::lookup::domain::{entities::CandidateRecord, value_objects::FilterExpression},
    shared::errors::AppResult,
};

/// Page size requested from the catalog store. Only one page is fetched.
pub const CANDIDATE_PAGE_SIZE: usize = 100;

/// Repository interface for the external product catalog
/// The store is treated as a high-recall candidate source; ranking happens locally
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Name used in logs and error messages
    fn store_name(&self) -> &'static str;

    /// Fetch at most `page_size` records matching `filter`, in store order
    async fn query(
        &self,
        filter: &FilterExpression,
        page_size: usize,
    ) -> AppResult<Vec<CandidateRecord>>;
}
