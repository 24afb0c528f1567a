pub mod lookup_request;
pub mod lookup_response;

pub use lookup_request::LookupRequest;
pub use lookup_response::{LookupItem, LookupResponse};
