pub mod catalog_store;

pub use catalog_store::{CatalogStore, CANDIDATE_PAGE_SIZE};

#[cfg(test)]
pub use catalog_store::MockCatalogStore;
