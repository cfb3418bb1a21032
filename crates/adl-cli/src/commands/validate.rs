//! `adl validate`.

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use serde_json::json;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;

/// Check an ADL file and list every problem found
#[derive(Debug, Parser)]
pub struct ValidateCommand {
    /// ADL file to check
    #[arg(short, long, default_value = "agent.yaml", env = "ADL_FILE", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,
}

impl ValidateCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let document = adl_spec::load(&self.file)?;
        let violations = adl_spec::violations(&document);

        match ctx.format {
            OutputFormat::Json => {
                let out = json!({
                    "file": self.file,
                    "valid": violations.is_empty(),
                    "violations": violations,
                });
                println!("{}", serde_json::to_string_pretty(&out).map_err(anyhow::Error::from)?);
            }
            OutputFormat::Text if !ctx.quiet => {
                if violations.is_empty() {
                    println!("{} {} is valid", ctx.icons.check(), self.file.display());
                }
                for violation in &violations {
                    println!("{} {}", ctx.icons.cross(), violation);
                }
            }
            OutputFormat::Text => {}
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(CliError::validation(format!(
                "{} problem(s) found in {}",
                violations.len(),
                self.file.display()
            )))
        }
    }
}
