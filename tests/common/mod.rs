#![allow(dead_code)]

pub mod stack;
pub mod test_server;

pub use stack::{Stack, StackBuilder};
pub use test_server::{closed_url, TestServer};
