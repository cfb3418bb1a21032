//! Error types for ADL document handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::Violation;

/// Errors raised while loading or validating an ADL document.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("ADL file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read ADL file: {source}")]
    Read {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    Parse { line: Option<usize>, message: String },

    #[error("validation failed: {0}")]
    Validation(Violation),
}

/// Result type alias for ADL document operations.
pub type Result<T> = std::result::Result<T, SpecError>;
