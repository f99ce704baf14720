use std::io::{self, Write};

use codemerge_core::ExtensionSet;
use colored::Colorize;
use log::debug;

use crate::types::{MergeMode, MergeOutcome};

pub fn print_merge_summary<W: Write>(
    writer: &mut W,
    outcome: &MergeOutcome,
    destination: &str,
) -> io::Result<()> {
    debug!("Printing merge summary for {} files", outcome.files.len());

    let ignored = if outcome.ignore.is_empty() {
        "(none)".to_string()
    } else {
        outcome.ignore.iter().collect::<Vec<_>>().join(", ")
    };
    writeln!(writer, "{} Ignoring directories: {}", "●".bright_blue(), ignored.dimmed())?;

    match outcome.mode {
        MergeMode::Scan => writeln!(
            writer,
            "{} Mode: {} ({})",
            "●".bright_blue(),
            outcome.mode,
            outcome.root.display().to_string().blue()
        )?,
        MergeMode::ExplicitFiles => {
            writeln!(writer, "{} Mode: {}", "●".bright_blue(), outcome.mode)?
        }
    }

    writeln!(
        writer,
        "{} Copied {} files to {}",
        "✓".green().bold(),
        outcome.files.len().to_string().cyan(),
        destination
    )?;
    writeln!(
        writer,
        "{} Merged size: {} characters",
        "●".bright_blue(),
        outcome.char_count().to_string().cyan()
    )?;
    writer.flush()?;
    Ok(())
}

pub fn print_no_files_message<W: Write>(
    writer: &mut W,
    outcome: &MergeOutcome,
    extensions: &ExtensionSet,
) -> io::Result<()> {
    debug!("No files matched");
    let exts: Vec<&str> = extensions.iter().collect();
    writeln!(
        writer,
        "{} No files matched under {} (extensions: {})",
        "⚠".yellow().bold(),
        outcome.root.display(),
        exts.join(", ").yellow()
    )?;
    writer.flush()?;
    Ok(())
}
