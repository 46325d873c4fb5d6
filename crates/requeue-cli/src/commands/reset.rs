//! Reset command - put posted queue rows back to the reset value.

use std::path::Path;

use colored::Colorize;
use requeue::{FileOutcome, FileReport, ResetConfig, Resetter, RunReport};

use crate::cli::Cli;

pub fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ResetConfig::new()
        .with_root(&cli.root)
        .with_reset_to(&cli.reset_to)
        .with_dry_run(cli.dry_run)
        .with_frontmatter(cli.frontmatter);
    let resetter = Resetter::with_config(config);

    if cli.json {
        let report = resetter.run()?;
        println!("{}", report.to_json()?);
        return Ok(());
    }

    let report = resetter.run_with(|file| print_file(file, cli.dry_run))?;
    print_summary(&report);

    Ok(())
}

fn print_file(file: &FileReport, dry_run: bool) {
    if let Some(line) = format_file(file, dry_run) {
        println!("{}", line);
    }
}

fn print_summary(report: &RunReport) {
    println!("{}", summary_line(report));
}

/// Console line for one file. Files left untouched print nothing.
fn format_file(file: &FileReport, dry_run: bool) -> Option<String> {
    match &file.outcome {
        FileOutcome::Reset { .. } => {
            let tag = if dry_run { "[WOULD RESET]" } else { "[RESET]" };
            Some(format!("{} {}", tag.green().bold(), file.path.display()))
        }
        FileOutcome::Failed { message } => Some(format!(
            "{} {} ({})",
            "[SKIP]".yellow().bold(),
            file.path.display(),
            message
        )),
        FileOutcome::Unchanged | FileOutcome::NotQueue => None,
    }
}

/// Final line of a run. A missing root prints only the notice.
fn summary_line(report: &RunReport) -> String {
    if !report.root_found {
        return missing_root_message(&report.root);
    }

    let label = if report.dry_run {
        "Files that would change"
    } else {
        "Files changed"
    };
    format!("Done. {}: {}", label, report.files_changed())
}

fn missing_root_message(root: &Path) -> String {
    let root = root.display().to_string();
    format!(
        "No {}/ directory found. Nothing to do.",
        root.trim_end_matches(['/', '\\'])
    )
}
