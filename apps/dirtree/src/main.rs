use anyhow::Result;
use clap::Parser;
use codemerge_core::DiskFs;
use codemerge_tree::Config;
use log::debug;
use std::io::{BufWriter, IsTerminal, Write};

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let color = std::io::stdout().is_terminal();
    let mut stdout = BufWriter::new(std::io::stdout());

    let cfg = Config::parse();
    debug!("Parsed CLI arguments: {:?}", cfg);

    let stats = codemerge_tree::run_tree(&cfg, &DiskFs, &mut stdout, color)?;
    codemerge_tree::print_tree_summary(&mut stdout, &stats)?;
    stdout.flush()?;

    Ok(())
}
