//! Error types for rule translation and document loading.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::FieldKind;

/// Errors raised while translating a rule into schema keywords.
///
/// Translators check their preconditions before touching the fragment, so a
/// returned error means the fragment is exactly as the caller passed it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("{rule} validator requires {required} (field '{field}' is {kind})")]
    UnsupportedCombination {
        rule: &'static str,
        required: &'static str,
        field: String,
        kind: FieldKind,
    },

    #[error("OneOf validator on field '{field}' has {choices} choices but {labels} labels")]
    LabelMismatch {
        field: String,
        choices: usize,
        labels: usize,
    },

    #[error("field '{field}' is declared more than once")]
    DuplicateField { field: String },
}

impl TranslateError {
    /// True for rules applied to a field category they cannot describe.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, TranslateError::UnsupportedCombination { .. })
    }

    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// Errors while loading a field document.
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid document: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::FileNotFound { .. } | LoadError::ReadError { .. } => 3,
            LoadError::InvalidJson { .. } => 2,
        }
    }
}
