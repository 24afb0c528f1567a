#![allow(dead_code)]

pub mod factories;
pub mod fake_store;
pub mod helpers;
pub mod notion_stub;
