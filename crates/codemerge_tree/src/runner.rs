use anyhow::Result;
use codemerge_core::{Error, FileSystem};
use log::info;
use std::io::Write;

use crate::{
    config::Config,
    printer::{TreeOptions, TreeStats, print_tree},
};

pub fn run_tree<W: Write, F: FileSystem + ?Sized>(
    cfg: &Config,
    fs: &F,
    writer: &mut W,
    color: bool,
) -> Result<TreeStats> {
    info!("Printing tree for {}", cfg.root.display());
    if !fs.exists(&cfg.root) {
        return Err(Error::PathNotFound(cfg.root.clone()).into());
    }

    let opts = TreeOptions { ignore: cfg.ignore_set(), color };
    let stats = print_tree(writer, fs, &cfg.root, &opts)?;
    info!("Tree complete: {} directories, {} files", stats.directories, stats.files);
    Ok(stats)
}
