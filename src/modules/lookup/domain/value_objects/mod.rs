pub mod catalog_schema;
pub mod filter_expression;
pub mod filter_mode;
pub mod lookup_query;

pub use catalog_schema::{CatalogField, CatalogSchema};
pub use filter_expression::FilterExpression;
pub use filter_mode::FilterMode;
pub use lookup_query::LookupQuery;
