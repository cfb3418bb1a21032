//! What a generation run did.

use std::path::PathBuf;

use adl_spec::Language;
use serde::Serialize;

/// Outcome for one output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Created,
    Overwritten,
    /// Already on disk and `overwrite` was off.
    SkippedExisting,
    /// Protected by `.adl-ignore`; never rendered.
    Ignored,
}

impl FileStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Overwritten => "overwritten",
            Self::SkippedExisting => "skipped (exists)",
            Self::Ignored => "ignored",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Relative to the output directory, `/`-separated.
    pub path: String,
    pub status: FileStatus,
}

/// Result of one post-generation hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookReport {
    pub command: String,
    pub success: bool,
    pub exit_code: Option<i32>,
    /// Combined stdout and stderr.
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub language: Language,
    pub files: Vec<FileReport>,
    pub hooks: Vec<HookReport>,
    pub warnings: Vec<String>,
    pub ignore_file_created: bool,
}

impl GenerationReport {
    pub fn new(output_dir: impl Into<PathBuf>, language: Language) -> Self {
        Self {
            output_dir: output_dir.into(),
            language,
            files: Vec::new(),
            hooks: Vec::new(),
            warnings: Vec::new(),
            ignore_file_created: false,
        }
    }

    pub fn record(&mut self, path: impl Into<String>, status: FileStatus) {
        self.files.push(FileReport {
            path: path.into(),
            status,
        });
    }

    pub fn warn(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }

    pub fn status_of(&self, path: &str) -> Option<FileStatus> {
        self.files.iter().find(|f| f.path == path).map(|f| f.status)
    }

    pub fn failed_hooks(&self) -> impl Iterator<Item = &HookReport> {
        self.hooks.iter().filter(|h| !h.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_lookup() {
        let mut report = GenerationReport::new("out", Language::Go);
        report.record("main.go", FileStatus::Created);
        report.record("go.mod", FileStatus::Created);
        report.record("tools/a.go", FileStatus::Ignored);

        assert_eq!(report.count(FileStatus::Created), 2);
        assert_eq!(report.count(FileStatus::Overwritten), 0);
        assert_eq!(report.status_of("tools/a.go"), Some(FileStatus::Ignored));
        assert_eq!(report.status_of("missing"), None);
    }

    #[test]
    fn test_json_shape() {
        let mut report = GenerationReport::new("out", Language::Rust);
        report.record("Cargo.toml", FileStatus::SkippedExisting);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["language"], "rust");
        assert_eq!(value["files"][0]["status"], "skipped_existing");
        assert_eq!(value["ignore_file_created"], false);
    }

    #[test]
    fn test_labels() {
        assert_eq!(FileStatus::SkippedExisting.label(), "skipped (exists)");
    }
}
