//! skillmap - editor for curriculum skillmap documents
//!
//! A skillmap is a title, a description and an ordered list of modules, each
//! holding objectives with a goal and a list of skills. Documents are loaded
//! from JSON, edited through an [`editor::Editor`] session that mirrors its
//! state into a local key-value store, and exported back to JSON.

pub mod app;
pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod persistence;
pub mod schema;
pub mod storage;
pub mod test_utils;
pub mod transfer;

pub use error::{Result, SkillmapError};
