//! Tests for the item listing service.
//!
//! - **api_tests**: HTTP endpoints driven through the router
//! - **store_tests**: JSON file and SQLite item stores
//! - **image_tests**: content-addressed image storage
//! - **config_tests**: configuration parsing and validation

pub mod config_tests;

/// `sha256("abc")` with the image extension
pub const ABC_IMAGE: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad.jpg";
