pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::{CandidateRecord, ScoredCandidate};
pub use repositories::CatalogStore;
pub use value_objects::{CatalogField, CatalogSchema, FilterExpression, FilterMode, LookupQuery};
