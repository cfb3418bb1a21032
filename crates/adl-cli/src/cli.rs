//! CLI argument definitions using clap derive macros.

use clap::{ArgAction, Parser, Subcommand};

use crate::commands::{GenerateCommand, SyncCommand, ValidateCommand};
use crate::error::CliError;
use crate::output::IconContext;

/// adl - scaffold agent projects from ADL files
///
/// Reads an `agent.yaml` document, validates it and writes a ready-to-build
/// Go, TypeScript or Rust project. Paths listed in `.adl-ignore` are never
/// regenerated.
#[derive(Debug, Parser)]
#[command(
    name = "adl",
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text", value_enum)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a project from an ADL file
    Generate(GenerateCommand),

    /// Add newly needed files without touching existing ones
    Sync(SyncCommand),

    /// Check an ADL file and list every problem found
    Validate(ValidateCommand),
}

impl Cli {
    /// Execute the selected command
    pub fn execute(self) -> Result<(), CliError> {
        let ctx = CommandContext {
            format: self.format,
            quiet: self.quiet,
            icons: IconContext::new(),
        };

        match self.command {
            Command::Generate(cmd) => cmd.execute(&ctx),
            Command::Sync(cmd) => cmd.execute(&ctx),
            Command::Validate(cmd) => cmd.execute(&ctx),
        }
    }
}

/// Context passed to all commands
#[derive(Debug)]
pub struct CommandContext {
    pub format: OutputFormat,
    pub quiet: bool,
    pub icons: IconContext,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["adl", "generate"]).unwrap();
        let Command::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.input.file, std::path::PathBuf::from("agent.yaml"));
        assert_eq!(cmd.input.output, std::path::PathBuf::from("."));
        assert_eq!(cmd.template, "minimal");
        assert!(!cmd.overwrite);
        assert!(cmd.deployment.is_none());
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "adl",
            "generate",
            "-f",
            "my.yaml",
            "-o",
            "out",
            "--overwrite",
            "--deployment",
            "cloudrun",
            "--flox",
            "--no-hooks",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);

        let Command::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        let config = cmd.config();
        assert!(config.overwrite);
        assert!(config.flox);
        assert!(!config.run_hooks);
        assert_eq!(config.deployment, Some(adl_spec::DeploymentType::CloudRun));
        assert_eq!(config.output_dir, std::path::PathBuf::from("out"));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["adl", "-q", "-v", "validate"]).is_err());
    }

    #[test]
    fn test_sync_has_no_overwrite_flag() {
        assert!(Cli::try_parse_from(["adl", "sync", "--overwrite"]).is_err());
    }
}
