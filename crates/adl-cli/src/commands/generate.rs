//! `adl generate`.

use adl_generator::{Generator, GeneratorConfig};
use adl_spec::DeploymentType;
use clap::{Parser, ValueEnum};

use super::InputArgs;
use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output;

/// Generate a project from an ADL file
#[derive(Debug, Parser)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Replace existing files not protected by .adl-ignore
    #[arg(long)]
    pub overwrite: bool,

    /// Template set to use
    #[arg(long, default_value = GeneratorConfig::DEFAULT_TEMPLATE)]
    pub template: String,

    /// Generate CI workflow files
    #[arg(long)]
    pub ci: bool,

    /// Generate CD workflow files
    #[arg(long)]
    pub cd: bool,

    /// Override spec.deployment.type
    #[arg(long, value_enum)]
    pub deployment: Option<DeploymentArg>,

    /// Enable the Flox sandbox files
    #[arg(long)]
    pub flox: bool,

    /// Enable the devcontainer files
    #[arg(long)]
    pub devcontainer: bool,

    /// Skip spec.hooks.post commands
    #[arg(long)]
    pub no_hooks: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeploymentArg {
    Kubernetes,
    #[value(name = "cloudrun", alias = "cloud-run")]
    CloudRun,
}

impl From<DeploymentArg> for DeploymentType {
    fn from(arg: DeploymentArg) -> Self {
        match arg {
            DeploymentArg::Kubernetes => Self::Kubernetes,
            DeploymentArg::CloudRun => Self::CloudRun,
        }
    }
}

impl GenerateCommand {
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            overwrite: self.overwrite,
            template: self.template.clone(),
            ci: self.ci,
            cd: self.cd,
            deployment: self.deployment.map(Into::into),
            flox: self.flox,
            devcontainer: self.devcontainer,
            run_hooks: !self.no_hooks,
            ..GeneratorConfig::new(&self.input.output)
        }
    }

    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let mut generator = Generator::from_file(&self.input.file, self.config())?;
        let report = generator.run()?;
        output::print_report(ctx, &report)
    }
}
