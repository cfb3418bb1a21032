//! Template registry.
//!
//! A registry is built for one target language. Templates come from three
//! roots consulted in a fixed order:
//!
//! | order | root                 | example key          |
//! |-------|----------------------|----------------------|
//! | 1     | `languages/<lang>/`  | `main.go`            |
//! | 2     | `common/`            | `docs/README.md`     |
//! | 3     | `sandbox/`           | `flox/manifest.toml` |
//!
//! Keys are the template path with `.tmpl` and the root prefix removed, so
//! roots can collide on a key. The first root to provide a key wins; later
//! roots never replace it.

use std::collections::BTreeMap;

use adl_spec::{DeploymentType, Document, Language};
use glob::Pattern;
use tracing::{debug, trace};

use crate::builtin::EMBEDDED;
use crate::error::{Result, TemplateError};

const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Output path (relative to the output directory) to template key.
pub type FileMap = BTreeMap<String, String>;

/// A template source root, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemplateRoot {
    Language,
    Common,
    Sandbox,
}

impl TemplateRoot {
    /// Roots in the order they are loaded.
    pub const ORDER: [TemplateRoot; 3] = [Self::Language, Self::Common, Self::Sandbox];

    fn prefix(self, language: Language) -> String {
        match self {
            Self::Language => format!("languages/{}/", language.as_str()),
            Self::Common => "common/".to_string(),
            Self::Sandbox => "sandbox/".to_string(),
        }
    }

    fn pattern(self, language: Language) -> String {
        match self {
            Self::Language => format!("languages/{}/*", language.as_str()),
            Self::Common => "common/*/*".to_string(),
            Self::Sandbox => "sandbox/*/*".to_string(),
        }
    }
}

/// A registered template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub key: String,
    pub root: TemplateRoot,
    /// Path the body was loaded from, including the `.tmpl` suffix.
    pub source: String,
    pub body: String,
}

/// Logical template keys resolved for one language.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    language: Language,
    entries: BTreeMap<String, TemplateEntry>,
}

impl TemplateRegistry {
    /// Build a registry from the embedded templates.
    pub fn new(language: Language) -> Result<Self> {
        Self::from_sources(language, EMBEDDED.iter().copied())
    }

    /// Build a registry from arbitrary `(path, body)` sources.
    ///
    /// Every body is compiled once so that a broken template fails here
    /// rather than halfway through a generation run.
    pub fn from_sources<'a, I>(language: Language, sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let sources: Vec<_> = sources.into_iter().collect();
        let mut entries: BTreeMap<String, TemplateEntry> = BTreeMap::new();

        for root in TemplateRoot::ORDER {
            let pattern = Pattern::new(&root.pattern(language)).map_err(|e| {
                TemplateError::Register {
                    key: root.pattern(language),
                    message: e.to_string(),
                }
            })?;
            let prefix = root.prefix(language);

            for &(path, body) in &sources {
                if !pattern.matches(path) {
                    continue;
                }

                let stem = path.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(path);
                let key = stem.strip_prefix(&prefix).unwrap_or(stem).to_string();

                if let Some(existing) = entries.get(&key) {
                    trace!(key = %key, kept = %existing.source, shadowed = %path, "template shadowed");
                    continue;
                }

                handlebars::Template::compile(body).map_err(|e| TemplateError::Register {
                    key: key.clone(),
                    message: e.to_string(),
                })?;

                entries.insert(
                    key.clone(),
                    TemplateEntry {
                        key,
                        root,
                        source: path.to_string(),
                        body: body.to_string(),
                    },
                );
            }
        }

        debug!(language = %language, templates = entries.len(), "template registry built");
        Ok(Self { language, entries })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Look up a template body.
    ///
    /// Tries the exact key, then `<key>.<language>`.
    pub fn get_template(&self, key: &str) -> Result<&str> {
        self.entry(key)
            .map(|entry| entry.body.as_str())
            .ok_or_else(|| TemplateError::NotFound(key.to_string()))
    }

    /// Look up the entry a key resolves to, with the same fallback as
    /// [`get_template`](Self::get_template).
    pub fn entry(&self, key: &str) -> Option<&TemplateEntry> {
        self.entries
            .get(key)
            .or_else(|| self.entries.get(&format!("{key}.{}", self.language)))
    }

    /// All registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Key of the per-skill template for this language.
    pub fn tool_template_key(&self) -> String {
        format!(
            "{}/tool.{}",
            self.language.tools_dir(),
            self.language.source_extension()
        )
    }

    /// Whether `key` names the per-skill template.
    pub fn is_tool_template(&self, key: &str) -> bool {
        key == self.tool_template_key()
    }

    /// Every file a run for `doc` may produce.
    ///
    /// A pure function of the skills, deployment type and sandbox toggles of
    /// the document.
    pub fn get_files(&self, doc: &Document) -> FileMap {
        let mut files = FileMap::new();
        let mut add = |path: &str, key: &str| {
            files.insert(path.to_string(), key.to_string());
        };

        add(".well-known/agent-card.json", "agent/agent-card.json");
        add("README.md", "docs/README.md");
        add(".editorconfig", "repo/.editorconfig");
        add(".gitattributes", "repo/.gitattributes");
        add("Dockerfile", "docker/Dockerfile");

        let base: &[&str] = match self.language {
            Language::Go => &["main.go", "go.mod", "config/config.go", "Taskfile.yml", ".gitignore"],
            Language::TypeScript => &[
                "src/index.ts",
                "package.json",
                "tsconfig.json",
                "Taskfile.yml",
                ".gitignore",
            ],
            Language::Rust => &[
                "src/main.rs",
                "Cargo.toml",
                "Taskfile.yml",
                ".gitignore",
                "src/tools/mod.rs",
            ],
        };
        for path in base {
            add(path, path);
        }

        if doc.deployment_type() == Some(DeploymentType::Kubernetes) {
            add("k8s/deployment.yaml", "k8s/deployment.yaml");
        }

        if doc.flox_enabled() {
            add(".flox/env/manifest.toml", "flox/manifest.toml");
            add(".flox/env.json", "flox/env.json");
            add(".flox/.gitignore", "flox/.gitignore");
        }

        if doc.devcontainer_enabled() {
            add(".devcontainer/devcontainer.json", "devcontainer/devcontainer.json");
        }

        let tool_key = self.tool_template_key();
        for skill in &doc.spec.skills {
            let path = format!(
                "{}/{}.{}",
                self.language.tools_dir(),
                skill.name,
                self.language.source_extension()
            );
            add(&path, &tool_key);
        }

        files
    }
}
