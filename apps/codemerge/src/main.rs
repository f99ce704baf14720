use anyhow::Result;
use clap::Parser;
use codemerge_core::DiskFs;
use codemerge_merge::{
    CLIPBOARD_OWNER_ENV, ClipboardPublisher, Config, Publisher, WriterPublisher,
};
use colored::Colorize;
use log::{debug, info};
use std::io::{self, BufWriter, Write};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    // Spawned by ClipboardPublisher to keep the copied text available
    if std::env::var_os(CLIPBOARD_OWNER_ENV).is_some() {
        return codemerge_merge::serve_clipboard_from_stdin();
    }

    let cfg = Config::parse();
    debug!("Parsed CLI arguments: {:?}", cfg);

    let start = Instant::now();
    let cwd = std::env::current_dir()?;
    let outcome = codemerge_merge::run_merge(&cfg, &DiskFs, &cwd)?;

    // With --stdout the merged text owns stdout, so the summary goes to stderr.
    let (mut publisher, mut report, destination): (Box<dyn Publisher>, Box<dyn Write>, &str) =
        if cfg.stdout {
            (
                Box::new(WriterPublisher::new(BufWriter::new(io::stdout()))),
                Box::new(BufWriter::new(io::stderr())),
                "stdout",
            )
        } else {
            (Box::new(ClipboardPublisher), Box::new(BufWriter::new(io::stdout())), "clipboard")
        };

    publisher.publish(&outcome.text)?;
    info!("Published {} characters to {}", outcome.char_count(), destination);

    if outcome.files.is_empty() {
        codemerge_merge::print_no_files_message(&mut report, &outcome, &cfg.extension_set())?;
    }
    codemerge_merge::print_merge_summary(&mut report, &outcome, destination)?;

    writeln!(
        report,
        "\n{} Finished in {}ms.",
        "●".bright_blue(),
        start.elapsed().as_millis().to_string().cyan()
    )?;
    report.flush()?;

    Ok(())
}
