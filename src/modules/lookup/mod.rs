pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{LookupService, LookupSettings};
pub use commands::router;
pub use domain::{CandidateRecord, CatalogSchema, CatalogStore, FilterExpression, FilterMode};
pub use infrastructure::{NotionClient, NotionSettings};
