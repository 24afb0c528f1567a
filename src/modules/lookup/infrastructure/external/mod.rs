pub mod common;
pub mod notion;

pub use common::CommonHttpHandler;
pub use notion::{NotionClient, NotionSettings};
