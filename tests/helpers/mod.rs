//! Test helpers module
//!
//! Database setup for tests that need PostgreSQL, and record fixtures for
//! tests that clean forms against in-memory lookups.

#![allow(dead_code)]

pub mod database_helper;
pub mod test_data;

#[allow(unused_imports)]
pub use database_helper::*;
#[allow(unused_imports)]
pub use test_data::*;
