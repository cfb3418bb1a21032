//! Text rendering of a [`GenerationReport`].

use std::io::{self, Write};

use adl_generator::{FileStatus, GenerationReport, IGNORE_FILE};

use super::IconContext;

pub fn write_report(
    out: &mut impl Write,
    icons: &IconContext,
    report: &GenerationReport,
) -> io::Result<()> {
    writeln!(
        out,
        "{} Generating {} project in {}",
        icons.info(),
        report.language,
        report.output_dir.display()
    )?;

    for file in &report.files {
        writeln!(
            out,
            "  {} {:<18} {}",
            icons.status(file.status),
            file.status.label(),
            file.path
        )?;
    }

    if report.ignore_file_created {
        writeln!(out, "  {} {:<18} {}", icons.status(FileStatus::Created), "created", IGNORE_FILE)?;
    }

    for hook in &report.hooks {
        let icon = if hook.success { icons.check() } else { icons.cross() };
        writeln!(out, "{icon} hook: {}", hook.command)?;
        if !hook.success {
            for line in hook.output.lines() {
                writeln!(out, "    {line}")?;
            }
        }
    }

    for warning in &report.warnings {
        writeln!(out, "{} {warning}", icons.warning())?;
    }

    writeln!(
        out,
        "{} {} created, {} overwritten, {} skipped, {} ignored",
        icons.check(),
        report.count(FileStatus::Created) + usize::from(report.ignore_file_created),
        report.count(FileStatus::Overwritten),
        report.count(FileStatus::SkippedExisting),
        report.count(FileStatus::Ignored),
    )
}
