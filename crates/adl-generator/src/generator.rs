//! The generation pipeline.

use std::path::{Path, PathBuf};

use adl_spec::Document;
use adl_templates::{
    document_context, render_path, skill_context, with_header, FileMap, GenerationMetadata,
    TemplateRegistry, TemplateRenderer,
};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::ci;
use crate::config::GeneratorConfig;
use crate::defaults::{default_patterns, render_ignore_file, IGNORE_FILE};
use crate::error::{GenerateError, Result};
use crate::hooks;
use crate::ignore::IgnoreChecker;
use crate::report::{FileStatus, GenerationReport};

/// Generates a project from one ADL document.
#[derive(Debug, Clone)]
pub struct Generator {
    document: Document,
    config: GeneratorConfig,
    timestamp: String,
}

impl Generator {
    pub fn new(document: Document, config: GeneratorConfig) -> Self {
        Self {
            document,
            config,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// Load the document from `path`.
    pub fn from_file(path: impl AsRef<Path>, config: GeneratorConfig) -> Result<Self> {
        Ok(Self::new(adl_spec::load(path)?, config))
    }

    /// Pin the timestamp written into headers, for reproducible output.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the whole pipeline.
    pub fn run(&mut self) -> Result<GenerationReport> {
        let registry = self.prepare()?;
        let files = registry.get_files(&self.document);
        self.execute(&registry, &files)
    }

    /// Every file this run may produce, after validation and overrides.
    pub fn file_set(&mut self) -> Result<FileMap> {
        let registry = self.prepare()?;
        Ok(registry.get_files(&self.document))
    }

    /// Render and write an explicit file set.
    pub fn render_file_set(&mut self, files: &FileMap) -> Result<GenerationReport> {
        let registry = self.prepare()?;
        self.execute(&registry, files)
    }

    fn prepare(&mut self) -> Result<TemplateRegistry> {
        adl_spec::validate(&self.document)?;
        self.apply_overrides();

        let language = self.document.language()?;
        Ok(TemplateRegistry::new(language)?)
    }

    fn apply_overrides(&mut self) {
        if let Some(deployment) = self.config.deployment {
            self.document.set_deployment_type(deployment);
        }
        if self.config.flox {
            self.document.enable_flox();
        }
        if self.config.devcontainer {
            self.document.enable_devcontainer();
        }
    }

    fn execute(&self, registry: &TemplateRegistry, files: &FileMap) -> Result<GenerationReport> {
        let output_dir = self.config.output_dir.as_path();
        std::fs::create_dir_all(output_dir).map_err(GenerateError::io(output_dir))?;

        let ignore = IgnoreChecker::load(output_dir)?;
        let ignore_path = output_dir.join(IGNORE_FILE);
        let ignore_file_existed = ignore_path.exists();

        let language = registry.language();
        let generation = GenerationMetadata::new(&self.config.template, &self.timestamp);
        let run = Run {
            document: &self.document,
            registry,
            renderer: TemplateRenderer::new(),
            context: document_context(&self.document, language, &generation)?,
            generation,
            ignore,
            output_dir,
            overwrite: self.config.overwrite,
        };

        info!(
            output = %output_dir.display(),
            language = %language,
            files = files.len(),
            "generating project"
        );

        let mut report = GenerationReport::new(output_dir, language);
        for (path, key) in files {
            let path = render_path(path, &self.document.metadata.name);
            let status = run.emit(&path, key)?;
            report.record(path, status);
        }

        if !ignore_file_existed {
            let patterns = default_patterns(language, &self.config.template);
            std::fs::write(&ignore_path, render_ignore_file(&patterns))
                .map_err(GenerateError::io(&ignore_path))?;
            info!(path = %ignore_path.display(), patterns = patterns.len(), "created ignore file");
            report.ignore_file_created = true;
        }

        let pipelines = ci::pipelines(&self.document, self.config.ci, self.config.cd);
        for warning in pipelines.warnings {
            warn!("{warning}");
            report.warn(warning);
        }
        for (path, key) in &pipelines.files {
            match run.emit(path, key) {
                Ok(status) => report.record(path.as_str(), status),
                Err(e) => {
                    warn!(path = %path, error = %e, "pipeline generation failed");
                    report.warn(format!("failed to generate {path}: {e}"));
                }
            }
        }

        if self.config.run_hooks && !self.document.post_hooks().is_empty() {
            report.hooks = hooks::run_hooks(self.document.post_hooks(), output_dir);
            let failed: Vec<String> = report
                .failed_hooks()
                .map(|h| format!("post hook failed: {}", h.command))
                .collect();
            for warning in failed {
                report.warn(warning);
            }
        }

        info!(
            created = report.count(FileStatus::Created),
            overwritten = report.count(FileStatus::Overwritten),
            skipped = report.count(FileStatus::SkippedExisting),
            ignored = report.count(FileStatus::Ignored),
            warnings = report.warnings.len(),
            "generation complete"
        );
        Ok(report)
    }
}

/// Per-run state shared by every emitted file.
struct Run<'a> {
    document: &'a Document,
    registry: &'a TemplateRegistry,
    renderer: TemplateRenderer,
    generation: GenerationMetadata,
    context: Value,
    ignore: IgnoreChecker,
    output_dir: &'a Path,
    overwrite: bool,
}

impl Run<'_> {
    /// Render and write one file, unless it is protected or already exists.
    fn emit(&self, path: &str, key: &str) -> Result<FileStatus> {
        if self.ignore.should_ignore(path) {
            debug!(path = %path, "ignored by pattern");
            return Ok(FileStatus::Ignored);
        }

        let body = self.registry.get_template(key)?;
        let rendered = if self.registry.is_tool_template(key) {
            let skill_name = Path::new(path)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default();
            let skill = self.document.skill(skill_name).ok_or_else(|| {
                GenerateError::SkillNotFound {
                    path: path.to_string(),
                    skill: skill_name.to_string(),
                }
            })?;
            let context = skill_context(
                self.document,
                skill,
                self.registry.language(),
                &self.generation,
            )?;
            self.renderer.render(key, body, &context)?
        } else {
            self.renderer.render(key, body, &self.context)?
        };

        let contents = with_header(path, &self.generation, rendered);
        self.write(path, contents)
    }

    fn write(&self, path: &str, contents: String) -> Result<FileStatus> {
        let target: PathBuf = self.output_dir.join(path);
        let existed = target.exists();

        if existed && !self.overwrite {
            warn!(path = %path, "file exists, skipping (use --overwrite to replace)");
            return Ok(FileStatus::SkippedExisting);
        }

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(GenerateError::io(parent))?;
        }
        std::fs::write(&target, contents).map_err(GenerateError::io(&target))?;

        let status = if existed {
            FileStatus::Overwritten
        } else {
            FileStatus::Created
        };
        debug!(path = %path, status = status.label(), "wrote file");
        Ok(status)
    }
}
