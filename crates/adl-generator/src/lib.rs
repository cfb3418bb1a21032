//! ADL project generation.
//!
//! [`Generator`] drives one run: validate the document, apply overrides from
//! [`GeneratorConfig`], compute the file set, then render and write each file
//! unless [`IgnoreChecker`] protects it or it already exists without
//! `overwrite`. CI/CD files and post hooks are best effort.

pub mod ci;
pub mod config;
pub mod defaults;
pub mod error;
pub mod generator;
pub mod hooks;
pub mod ignore;
pub mod report;

pub use config::GeneratorConfig;
pub use defaults::{default_patterns, render_ignore_file, IGNORE_FILE};
pub use error::{GenerateError, Result};
pub use generator::Generator;
pub use ignore::IgnoreChecker;
pub use report::{FileReport, FileStatus, GenerationReport, HookReport};
