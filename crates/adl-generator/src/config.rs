//! Generator configuration.

use std::path::PathBuf;

use adl_spec::DeploymentType;
use serde::{Deserialize, Serialize};

/// Options for one generation run, usually built from CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory files are written into. Created if missing.
    pub output_dir: PathBuf,
    /// Replace existing files that are not protected by `.adl-ignore`.
    pub overwrite: bool,
    /// Template set name, recorded in headers and used for ignore defaults.
    pub template: String,
    /// Generate CI workflow files.
    pub ci: bool,
    /// Generate CD workflow files.
    pub cd: bool,
    /// Overrides `spec.deployment.type`.
    pub deployment: Option<DeploymentType>,
    /// Forces `spec.sandbox.flox.enabled`.
    pub flox: bool,
    /// Forces `spec.sandbox.devcontainer.enabled`.
    pub devcontainer: bool,
    /// Run `spec.hooks.post` after writing files.
    pub run_hooks: bool,
}

impl GeneratorConfig {
    pub const DEFAULT_TEMPLATE: &'static str = "minimal";

    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Profile used by `adl sync`: never overwrite, default template.
    ///
    /// Only files that do not exist yet are added; protected files are
    /// skipped before that check.
    pub fn sync(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            overwrite: false,
            template: Self::DEFAULT_TEMPLATE.to_string(),
            ..Self::new(output_dir)
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            overwrite: false,
            template: Self::DEFAULT_TEMPLATE.to_string(),
            ci: false,
            cd: false,
            deployment: None,
            flox: false,
            devcontainer: false,
            run_hooks: true,
        }
    }
}
