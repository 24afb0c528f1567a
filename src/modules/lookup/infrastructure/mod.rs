pub mod external;

pub use external::{NotionClient, NotionSettings};
