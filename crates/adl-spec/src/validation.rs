//! Structural and semantic checks for ADL documents.
//!
//! Checks run in a fixed precedence order:
//!
//! 1. `apiVersion` / `kind` literals
//! 2. `metadata` fields
//! 3. `spec.server.port` range
//! 4. `spec.capabilities` presence
//! 5. `spec.language`: exactly one block, with its required fields
//! 6. every skill's id, name, description, tags and schema
//!
//! [`violations`] collects everything in that order. [`validate`] stops at
//! the first violation and returns it as an error, which is what generation
//! uses.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, SpecError};
use crate::types::{Document, Language, LanguageConfig, Skill, API_VERSION, KIND};

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Dotted path of the offending field.
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn required(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("{field} is required");
        Self { field, message }
    }

    pub(crate) fn language_count(found: &[Language]) -> Self {
        let names: Vec<_> = found.iter().map(Language::as_str).collect();
        let message = if names.is_empty() {
            "spec.language must define exactly one of go, typescript, rust (found none)".to_string()
        } else {
            format!(
                "spec.language must define exactly one of go, typescript, rust (found {}: {})",
                names.len(),
                names.join(", ")
            )
        };
        Self::new("spec.language", message)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validate a document, returning the first violation as an error.
pub fn validate(doc: &Document) -> Result<()> {
    match violations(doc).into_iter().next() {
        Some(violation) => Err(SpecError::Validation(violation)),
        None => Ok(()),
    }
}

/// Collect every violation, in precedence order. Empty means valid.
pub fn violations(doc: &Document) -> Vec<Violation> {
    let mut found = Vec::new();

    if doc.api_version != API_VERSION {
        found.push(Violation::new(
            "apiVersion",
            format!("apiVersion must be '{API_VERSION}', got '{}'", doc.api_version),
        ));
    }
    if doc.kind != KIND {
        found.push(Violation::new(
            "kind",
            format!("kind must be '{KIND}', got '{}'", doc.kind),
        ));
    }

    check_metadata(doc, &mut found);

    let port = doc.spec.server.port;
    if !(1..=65535).contains(&port) {
        found.push(Violation::new(
            "spec.server.port",
            format!("spec.server.port must be between 1 and 65535, got {port}"),
        ));
    }

    if doc.spec.capabilities.is_none() {
        found.push(Violation::required("spec.capabilities"));
    }

    match &doc.spec.language {
        None => found.push(Violation::required("spec.language")),
        Some(language) => check_language(language, &mut found),
    }

    for (index, skill) in doc.spec.skills.iter().enumerate() {
        check_skill(index, skill, &mut found);
    }

    found
}

fn check_metadata(doc: &Document, found: &mut Vec<Violation>) {
    let metadata = &doc.metadata;

    if metadata.name.trim().is_empty() {
        found.push(Violation::required("metadata.name"));
    }
    if metadata.description.trim().is_empty() {
        found.push(Violation::required("metadata.description"));
    }
    if metadata.version.trim().is_empty() {
        found.push(Violation::required("metadata.version"));
    } else if semver::Version::parse(&metadata.version).is_err() {
        warn!(version = %metadata.version, "metadata.version is not a valid semver string");
    }
}

fn check_language(language: &LanguageConfig, found: &mut Vec<Violation>) {
    let populated = language.populated();
    if populated.len() != 1 {
        found.push(Violation::language_count(&populated));
    }

    if let Some(go) = &language.go {
        require(found, "spec.language.go.module", &go.module);
        require(found, "spec.language.go.version", &go.version);
    }
    if let Some(ts) = &language.typescript {
        require(found, "spec.language.typescript.packageName", &ts.package_name);
        require(found, "spec.language.typescript.nodeVersion", &ts.node_version);
    }
    if let Some(rust) = &language.rust {
        require(found, "spec.language.rust.packageName", &rust.package_name);
        require(found, "spec.language.rust.version", &rust.version);
        require(found, "spec.language.rust.edition", &rust.edition);
    }
}

fn check_skill(index: usize, skill: &Skill, found: &mut Vec<Violation>) {
    let prefix = format!("spec.skills[{index}]");

    require(found, format!("{prefix}.id"), &skill.id);
    require(found, format!("{prefix}.name"), &skill.name);
    if !is_file_name(&skill.name) {
        found.push(Violation::new(
            format!("{prefix}.name"),
            format!("{prefix}.name must be a plain file name without '/', '\\' or '..'"),
        ));
    }
    require(found, format!("{prefix}.description"), &skill.description);

    if skill.tags.iter().all(|t| t.trim().is_empty()) {
        found.push(Violation::new(
            format!("{prefix}.tags"),
            format!("{prefix}.tags must contain at least one tag"),
        ));
    }

    match &skill.schema {
        None | Some(serde_json::Value::Null) => {
            found.push(Violation::required(format!("{prefix}.schema")))
        }
        Some(serde_json::Value::Object(_)) => {}
        Some(_) => found.push(Violation::new(
            format!("{prefix}.schema"),
            format!("{prefix}.schema must be an object"),
        )),
    }
}

/// Skill names become tool file names, so they must stay in one path segment.
fn is_file_name(name: &str) -> bool {
    !name.contains(['/', '\\']) && !name.contains("..")
}

fn require(found: &mut Vec<Violation>, field: impl Into<String>, value: &str) {
    if value.trim().is_empty() {
        found.push(Violation::required(field));
    }
}
