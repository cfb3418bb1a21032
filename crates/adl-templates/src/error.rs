//! Template error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template not found: {0}")]
    NotFound(String),

    #[error("invalid template '{key}': {message}")]
    Register { key: String, message: String },

    #[error("failed to render template '{key}': {message}")]
    Render { key: String, message: String },

    #[error("failed to build template context: {0}")]
    Context(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
