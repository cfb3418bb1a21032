//! `.adl-ignore` pattern matching.
//!
//! Patterns are tried in file order and the first match wins:
//!
//! - `dir/` matches every path starting with `dir/`.
//! - A pattern containing `*` is a glob where `*` stays within one path
//!   segment. `dir/*` additionally matches anything below `dir/`.
//! - Anything else matches the exact path, or any path containing it.
//!
//! The last rule is lenient on purpose: `go.sum` also protects
//! `vendor/go.sum`. Short bare patterns can over-match.

use std::io::ErrorKind;
use std::path::Path;

use glob::{MatchOptions, Pattern};
use tracing::{debug, trace};

use crate::defaults::IGNORE_FILE;
use crate::error::{GenerateError, Result};

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Decides which output paths are protected from regeneration.
#[derive(Debug, Clone, Default)]
pub struct IgnoreChecker {
    patterns: Vec<String>,
}

impl IgnoreChecker {
    /// Read `<output_dir>/.adl-ignore`. A missing file yields no patterns.
    pub fn load(output_dir: impl AsRef<Path>) -> Result<Self> {
        let path = output_dir.as_ref().join(IGNORE_FILE);

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no ignore file");
                return Ok(Self::default());
            }
            Err(source) => return Err(GenerateError::Ignore { path, source }),
        };

        let checker = Self::from_patterns(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        );
        debug!(path = %path.display(), patterns = checker.patterns.len(), "loaded ignore file");
        Ok(checker)
    }

    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether `path` (relative to the output directory) is protected.
    pub fn should_ignore(&self, path: impl AsRef<Path>) -> bool {
        let path = normalize(path.as_ref());

        match self.patterns.iter().find(|p| matches(p, &path)) {
            Some(pattern) => {
                trace!(path = %path, pattern = %pattern, "path ignored");
                true
            }
            None => false,
        }
    }
}

fn normalize(path: &Path) -> String {
    let path = path.to_string_lossy().replace('\\', "/");
    match path.strip_prefix("./") {
        Some(rest) => rest.to_string(),
        None => path,
    }
}

fn matches(pattern: &str, path: &str) -> bool {
    if pattern.ends_with('/') {
        return path.starts_with(pattern);
    }

    if pattern.contains('*') {
        let glob = Pattern::new(pattern)
            .map(|glob| glob.matches_with(path, GLOB_OPTIONS))
            .unwrap_or(false);
        let below_dir = pattern
            .strip_suffix('*')
            .filter(|dir| dir.ends_with('/'))
            .map(|dir| path.starts_with(dir))
            .unwrap_or(false);
        return glob || below_dir;
    }

    path == pattern || (!pattern.is_empty() && path.contains(pattern))
}
