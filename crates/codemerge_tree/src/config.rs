use clap::Parser;
use codemerge_core::{DEFAULT_IGNORE_DIRS, IgnoreSet};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "dirtree")]
#[command(about = "Print a directory tree, skipping ignored folders")]
pub struct Config {
    /// Directory to print
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Names to skip entirely
    #[arg(long, num_args = 0.., default_values_t = default_ignore_dirs())]
    pub ignore: Vec<String>,
}

impl Config {
    pub fn ignore_set(&self) -> IgnoreSet {
        IgnoreSet::new(self.ignore.iter().cloned())
    }
}

fn default_ignore_dirs() -> Vec<String> {
    DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()).collect()
}
