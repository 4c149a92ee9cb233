//! Skillmap document model
//!
//! The document tree plus the pure edit operations over it. Every operation
//! takes the current value by reference and returns a new one.

pub mod document;
pub mod ops;
pub mod selection;

use std::fmt;

use thiserror::Error;

pub use document::{
    DEFAULT_MODULE_TITLE, DEFAULT_OBJECTIVE_GOAL, DEFAULT_SKILL, Module, Objective, Skillmap,
};

/// Nesting level an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Module,
    Objective,
    Skill,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Module => "module",
            Self::Objective => "objective",
            Self::Skill => "skill",
        })
    }
}

/// A refused edit. The input document is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("cannot remove the last module")]
    LastModule,

    #[error("{level} index {index} is out of range ({len} present)")]
    IndexOutOfRange {
        level: Level,
        index: usize,
        len: usize,
    },

    #[error("module order {order:?} is not a permutation of 0..{len}")]
    InvalidPermutation { order: Vec<usize>, len: usize },

    #[error("module title cannot be empty")]
    EmptyTitle,
}
