//! Command implementations.

mod generate;
mod sync;
mod validate;

pub use generate::GenerateCommand;
pub use sync::SyncCommand;
pub use validate::ValidateCommand;

use std::path::PathBuf;

use clap::{Args, ValueHint};

/// Input and output locations shared by the generating commands.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// ADL file to read
    #[arg(short, long, default_value = "agent.yaml", env = "ADL_FILE", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Directory to write the project into
    #[arg(short, long, default_value = ".", env = "ADL_OUTPUT", value_hint = ValueHint::DirPath)]
    pub output: PathBuf,
}
