//! CLI errors and exit codes.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use adl_generator::GenerateError;
use adl_spec::SpecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// The ADL file could not be parsed.
    #[error("{message}")]
    Config {
        message: String,
        hint: Option<String>,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
        path: Option<PathBuf>,
    },

    #[error("{message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("{message}")]
    NotFound {
        message: String,
        resource_type: String,
        resource_name: String,
    },

    /// Generation stopped partway.
    #[error("{message}")]
    Command { message: String, command: String },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "E001",
            Self::Io { .. } => "E002",
            Self::Validation { .. } => "E004",
            Self::NotFound { .. } => "E005",
            Self::Command { .. } => "E007",
            Self::Other(_) => "E999",
        }
    }

    /// Numeric process exit status.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Config { .. } => 2,
            Self::Io { .. } => 3,
            Self::Validation { .. } => 5,
            Self::NotFound { .. } => 6,
            Self::Command { .. } => 8,
            Self::Other(_) => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    pub fn not_found(resource_type: impl Into<String>, resource_name: impl Into<String>) -> Self {
        let resource_type = resource_type.into();
        let resource_name = resource_name.into();
        Self::NotFound {
            message: format!("{resource_type} not found: {resource_name}"),
            resource_type,
            resource_name,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
            path: None,
        }
    }
}

impl From<SpecError> for CliError {
    fn from(err: SpecError) -> Self {
        match err {
            SpecError::NotFound { path } => Self::not_found("ADL file", path.display().to_string()),
            SpecError::Read { source } => Self::Io {
                message: format!("failed to read ADL file: {source}"),
                source,
                path: None,
            },
            SpecError::Parse { line, message } => Self::Config {
                hint: line.map(|l| format!("check the YAML syntax around line {l}")),
                message: format!("invalid ADL file: {message}"),
            },
            SpecError::Validation(violation) => Self::Validation {
                message: format!("validation failed: {violation}"),
                field: Some(violation.field),
            },
        }
    }
}

impl From<GenerateError> for CliError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::Spec(e) => e.into(),
            GenerateError::Io { path, source } | GenerateError::Ignore { path, source } => {
                Self::Io {
                    message: format!("{}: {source}", path.display()),
                    source,
                    path: Some(path),
                }
            }
            other @ (GenerateError::Template(_) | GenerateError::SkillNotFound { .. }) => {
                Self::Command {
                    message: other.to_string(),
                    command: "generate".to_string(),
                }
            }
        }
    }
}
