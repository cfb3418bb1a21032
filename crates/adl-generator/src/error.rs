//! Generation errors.

use std::path::PathBuf;

use adl_spec::SpecError;
use adl_templates::TemplateError;
use thiserror::Error;

/// Fatal errors; any of these stops the run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("skill '{skill}' not found for {path}")]
    SkillNotFound { path: String, skill: String },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read ignore file {}: {source}", path.display())]
    Ignore {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
