//! CI/CD workflow selection.

use adl_spec::Document;
use adl_templates::FileMap;

/// Source control platform that hosts the pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScmProvider {
    GitHub,
    GitLab,
}

impl ScmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
        }
    }

    /// Provider from `spec.scm.provider`. Missing or unknown providers fall
    /// back to GitHub with a warning.
    pub fn resolve(doc: &Document) -> (Self, Option<String>) {
        let provider = doc
            .spec
            .scm
            .as_ref()
            .map(|scm| scm.provider.trim().to_ascii_lowercase())
            .unwrap_or_default();

        match provider.as_str() {
            "github" => (Self::GitHub, None),
            "gitlab" => (Self::GitLab, None),
            "" => (
                Self::GitHub,
                Some("spec.scm.provider is not set; using github".to_string()),
            ),
            other => (
                Self::GitHub,
                Some(format!("unsupported SCM provider '{other}'; using github")),
            ),
        }
    }

    fn ci_file(&self) -> (&'static str, &'static str) {
        match self {
            Self::GitHub => (".github/workflows/ci.yml", "ci/github.yml"),
            Self::GitLab => (".gitlab-ci.yml", "ci/gitlab.yml"),
        }
    }
}

/// Workflow files to generate, plus warnings to surface.
#[derive(Debug, Default)]
pub struct Pipelines {
    pub files: FileMap,
    pub warnings: Vec<String>,
}

pub fn pipelines(doc: &Document, ci: bool, cd: bool) -> Pipelines {
    let mut pipelines = Pipelines::default();
    if !ci && !cd {
        return pipelines;
    }

    let (provider, warning) = ScmProvider::resolve(doc);
    pipelines.warnings.extend(warning);

    if ci {
        let (path, key) = provider.ci_file();
        pipelines.files.insert(path.to_string(), key.to_string());
    }

    if cd {
        match provider {
            ScmProvider::GitHub => {
                pipelines
                    .files
                    .insert(".github/workflows/cd.yml".to_string(), "cd/github.yml".to_string());
            }
            other => pipelines.warnings.push(format!(
                "CD generation is not supported for {}; skipping",
                other.as_str()
            )),
        }
    }

    pipelines
}
