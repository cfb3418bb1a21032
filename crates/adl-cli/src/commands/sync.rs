//! `adl sync`.

use adl_generator::{Generator, GeneratorConfig};
use clap::Parser;

use super::InputArgs;
use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output;

/// Add files the ADL document now needs, leaving existing files alone
#[derive(Debug, Parser)]
pub struct SyncCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Generate CI workflow files
    #[arg(long)]
    pub ci: bool,

    /// Generate CD workflow files
    #[arg(long)]
    pub cd: bool,

    /// Skip spec.hooks.post commands
    #[arg(long)]
    pub no_hooks: bool,
}

impl SyncCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let config = GeneratorConfig {
            ci: self.ci,
            cd: self.cd,
            run_hooks: !self.no_hooks,
            ..GeneratorConfig::sync(&self.input.output)
        };

        let report = Generator::from_file(&self.input.file, config)?.run()?;
        output::print_report(ctx, &report)
    }
}
