use codemerge_core::{FileEntry, IgnoreSet};
use std::{fmt, path::PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// Files collected by walking a folder
    Scan,
    /// Files given one by one with `--files`
    ExplicitFiles,
}

impl fmt::Display for MergeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeMode::Scan => write!(f, "scan folder"),
            MergeMode::ExplicitFiles => write!(f, "specific files"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub text: String,
    pub files: Vec<FileEntry>,
    /// Directory the headers are relative to
    pub root: PathBuf,
    pub mode: MergeMode,
    pub ignore: IgnoreSet,
}

impl MergeOutcome {
    /// Size of the merged text in characters, not bytes
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
