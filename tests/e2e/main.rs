//! E2E test suite entry point.

#[path = "../common/mod.rs"]
mod common;
mod export_snapshot;
mod session_workflow;
