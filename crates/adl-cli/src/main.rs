//! `adl`: generate agent projects from ADL files.

use std::io::IsTerminal;
use std::process::ExitCode;

use adl_common_log::{LogConfig, LogLevel};
use clap::Parser;
use tracing::error;

mod cli;
mod commands;
mod error;
mod output;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(&cli);

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.code(), "{e}");
            if let Some(hint) = e.hint() {
                eprintln!("hint: {hint}");
            }
            e.exit_code()
        }
    }
}

fn init_logging(cli: &Cli) {
    let mut config = LogConfig::from_env()
        .with_ansi(std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal());
    if cli.verbose > 0 || cli.quiet {
        config = config.with_level(LogLevel::from_verbosity(cli.verbose, cli.quiet));
    }

    if let Err(e) = adl_common_log::init(config) {
        eprintln!("warning: {e}");
    }
}
