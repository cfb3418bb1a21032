//! Provenance headers for generated files.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Information stamped into generated files and exposed to templates as
/// `generation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    /// Version of the generator.
    pub version: String,
    /// Template set name (for example `minimal`).
    pub template: String,
    /// RFC 3339 timestamp of the run.
    pub timestamp: String,
}

impl GenerationMetadata {
    pub fn new(template: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            template: template.into(),
            timestamp: timestamp.into(),
        }
    }

    fn lines(&self) -> [String; 2] {
        [
            format!(
                "Generated by adl v{} (template: {}) at {}.",
                self.version, self.template, self.timestamp
            ),
            "Regenerating may overwrite manual changes; list this path in .adl-ignore to protect it."
                .to_string(),
        ]
    }
}

/// How a file type writes comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `// ...`
    DoubleSlash,
    /// `# ...`
    Hash,
    /// `<!-- ... -->`
    Html,
}

impl CommentStyle {
    /// Comment style for an output path, if it is a type that gets a header.
    pub fn for_path(path: &str) -> Option<Self> {
        let path = Path::new(path);
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

        match file_name {
            "go.mod" => return Some(Self::DoubleSlash),
            "Dockerfile" | "Taskfile.yml" | ".gitignore" | ".gitattributes" | ".editorconfig" => {
                return Some(Self::Hash)
            }
            _ => {}
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some("go" | "rs" | "ts" | "js") => Some(Self::DoubleSlash),
            Some("yaml" | "yml" | "toml" | "sh") => Some(Self::Hash),
            Some("md") => Some(Self::Html),
            _ => None,
        }
    }

    fn comment(self, line: &str) -> String {
        match self {
            Self::DoubleSlash => format!("// {line}"),
            Self::Hash => format!("# {line}"),
            Self::Html => format!("<!-- {line} -->"),
        }
    }
}

/// Header block for `path`, or `None` for JSON and unrecognized files.
pub fn header_for(path: &str, meta: &GenerationMetadata) -> Option<String> {
    let style = CommentStyle::for_path(path)?;
    let mut header = String::new();
    for line in meta.lines() {
        header.push_str(&style.comment(&line));
        header.push('\n');
    }
    header.push('\n');
    Some(header)
}

/// Prepend the header for `path` to `body`, when one applies.
pub fn with_header(path: &str, meta: &GenerationMetadata, body: String) -> String {
    match header_for(path, meta) {
        Some(header) => header + &body,
        None => body,
    }
}
