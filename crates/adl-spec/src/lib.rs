//! Agent Definition Language (ADL) documents.
//!
//! This crate provides the typed model of an `agent.yaml` file, the loader
//! that turns YAML into a [`Document`], and the validator that checks the
//! structural and semantic rules a document must satisfy before anything is
//! generated from it.

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

pub use error::{Result, SpecError};
pub use loader::{load, parse_str};
pub use types::*;
pub use validation::{validate, violations, Violation};
