pub mod client;
pub mod dto;
pub mod mapper;

pub use client::{NotionClient, NotionSettings};
pub use mapper::NotionMapper;
