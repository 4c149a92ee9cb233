//! Shared test utilities for skillmap.

pub mod fixtures;

pub use fixtures::{DocumentFixture, SAMPLE_JSON, modules_titled, sample_skillmap};
