use clap::Parser;
use codemerge_core::{
    DEFAULT_EXTENSIONS, DEFAULT_HEADER_PREFIX, DEFAULT_IGNORE_DIRS, ExtensionSet, IgnoreSet,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "codemerge")]
#[command(about = "Merge source files and copy the result to the clipboard")]
pub struct Config {
    /// Root directory to scan (ignored if --files is used)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Specific files to merge, in the given order
    #[arg(long, num_args = 0..)]
    pub files: Option<Vec<PathBuf>>,

    /// Folders to ignore
    #[arg(long, num_args = 0.., default_values_t = default_ignore_dirs())]
    pub ignore: Vec<String>,

    /// File extensions to include
    #[arg(long, num_args = 0.., default_values_t = default_extensions())]
    pub ext: Vec<String>,

    /// Also skip files matched by .gitignore and .ignore rules
    #[arg(long)]
    pub gitignore: bool,

    /// Print the merged text to stdout instead of copying it to the clipboard
    #[arg(long)]
    pub stdout: bool,

    /// Comment marker written before each file path
    #[arg(long, default_value = DEFAULT_HEADER_PREFIX)]
    pub header_prefix: String,
}

impl Config {
    pub fn ignore_set(&self) -> IgnoreSet {
        IgnoreSet::new(self.ignore.iter().cloned())
    }

    pub fn extension_set(&self) -> ExtensionSet {
        ExtensionSet::new(&self.ext)
    }

    /// The explicit file list, if one was given and is non-empty
    pub fn explicit_files(&self) -> Option<&[PathBuf]> {
        self.files.as_deref().filter(|files| !files.is_empty())
    }
}

fn default_ignore_dirs() -> Vec<String> {
    DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()).collect()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}
