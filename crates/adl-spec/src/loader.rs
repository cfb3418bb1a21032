//! ADL file loading and parsing.

use std::path::Path;

use tracing::debug;

use crate::error::{Result, SpecError};
use crate::types::Document;

/// Load an ADL document from a YAML file.
///
/// The file extension is irrelevant; the content must be YAML.
pub fn load(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SpecError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    let document = parse_str(&contents)?;

    debug!(path = %path.display(), name = %document.metadata.name, "loaded ADL document");
    Ok(document)
}

/// Parse an ADL document from a YAML string.
pub fn parse_str(contents: &str) -> Result<Document> {
    serde_yaml::from_str(contents).map_err(|e| SpecError::Parse {
        line: e.location().map(|l| l.line()),
        message: e.to_string(),
    })
}
