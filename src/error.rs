//! Error types for the progress component

use std::fmt;

/// Which of the two arcs an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcRole {
    Fill,
    Background,
}

impl fmt::Display for ArcRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArcRole::Fill => write!(f, "fill"),
            ArcRole::Background => write!(f, "background"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProgressError {
    /// Container or arc is not the expected node kind
    #[error("element must be {expected}, got {found}")]
    InvalidElement { expected: &'static str, found: String },

    /// Fill or background arc could not be found
    #[error("failed to resolve the {arc} arc ({lookup})")]
    ElementResolution { arc: ArcRole, lookup: String },

    /// Configuration value has the wrong type
    #[error("{param} must be {expected}")]
    Validation {
        param: &'static str,
        expected: &'static str,
    },

    /// Assignment outside the valid domain
    #[error("{param} must be {constraint}, got {value}")]
    Range {
        param: &'static str,
        value: f64,
        constraint: &'static str,
    },

    #[error("progress cannot be hidden and animated at the same time")]
    ConflictingState,
}

pub type Result<T> = std::result::Result<T, ProgressError>;
