//! Rendering command results for the terminal.

mod icons;
mod report;

pub use icons::IconContext;
pub use report::write_report;

use std::io::{self, Write};

use adl_generator::GenerationReport;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;

/// Print a generation report to stdout in the selected format.
pub fn print_report(ctx: &CommandContext, report: &GenerationReport) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match ctx.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, report).map_err(anyhow::Error::from)?;
            out.write_all(b"\n")?;
        }
        OutputFormat::Text if ctx.quiet => {}
        OutputFormat::Text => write_report(&mut out, &ctx.icons, report)?,
    }
    Ok(())
}
