//! Post-generation shell hooks.
//!
//! Each command runs through `sh -c` in the output directory and blocks
//! until it exits. There is no timeout. A failing hook is reported and
//! logged; it never stops the run.

use std::path::Path;
use std::process::Command;

use tracing::{info, warn};

use crate::report::HookReport;

/// Run every command in order.
pub fn run_hooks(commands: &[String], dir: &Path) -> Vec<HookReport> {
    commands.iter().map(|command| run_hook(command, dir)).collect()
}

pub fn run_hook(command: &str, dir: &Path) -> HookReport {
    info!(command = %command, "running post hook");

    match Command::new("sh").arg("-c").arg(command).current_dir(dir).output() {
        Ok(output) => {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));

            let success = output.status.success();
            if !success {
                warn!(
                    command = %command,
                    code = ?output.status.code(),
                    output = %combined.trim_end(),
                    "post hook failed"
                );
            }

            HookReport {
                command: command.to_string(),
                success,
                exit_code: output.status.code(),
                output: combined,
            }
        }
        Err(e) => {
            warn!(command = %command, error = %e, "post hook could not be started");
            HookReport {
                command: command.to_string(),
                success: false,
                exit_code: None,
                output: e.to_string(),
            }
        }
    }
}
