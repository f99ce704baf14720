use std::{
    borrow::Cow,
    fs::FileType,
    io,
    path::{Path, PathBuf},
};

use log::trace;

use crate::types::IgnoreSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Other,
}

impl From<FileType> for EntryKind {
    fn from(ft: FileType) -> Self {
        if ft.is_symlink() {
            EntryKind::Symlink
        } else if ft.is_dir() {
            EntryKind::Dir
        } else if ft.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// A single directory listing result. The kind is taken without following symlinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self { path: path.into(), kind }
    }

    pub fn name(&self) -> Cow<'_, str> {
        self.path.file_name().map(|n| n.to_string_lossy()).unwrap_or(Cow::Borrowed(""))
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Entries with one of these names are skipped and never descended into
    pub ignore: IgnoreSet,
    /// Also honour `.gitignore` / `.ignore` files (only supported on disk)
    pub git_ignore: bool,
}

/// Filesystem operations used by the collector, merger and tree printer.
///
/// `DiskFs` is the real implementation; `MemoryFs` lets tests run against a
/// virtual tree.
pub trait FileSystem {
    /// Kind of the entry at `path`, without following a final symlink.
    fn kind(&self, path: &Path) -> io::Result<EntryKind>;

    /// Unsorted entries directly inside `path`.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    fn exists(&self, path: &Path) -> bool {
        self.kind(path).is_ok()
    }

    /// True if `path` is a regular file once symlinks are followed.
    fn is_file_following(&self, path: &Path) -> bool {
        matches!(self.kind(path), Ok(EntryKind::File))
    }

    /// Lazily yields every entry strictly below `root`, in no particular order.
    fn walk<'a>(
        &'a self,
        root: &Path,
        opts: &WalkOptions,
    ) -> Box<dyn Iterator<Item = io::Result<DirEntry>> + 'a> {
        Box::new(Walk::new(self, root, opts.ignore.clone()))
    }
}

/// Depth-first walk driven by an explicit stack of directories still to read.
pub struct Walk<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    ignore: IgnoreSet,
    stack: Vec<PathBuf>,
    pending: std::vec::IntoIter<DirEntry>,
}

impl<'a, F: FileSystem + ?Sized> Walk<'a, F> {
    pub fn new(fs: &'a F, root: &Path, ignore: IgnoreSet) -> Self {
        Self { fs, ignore, stack: vec![root.to_path_buf()], pending: Vec::new().into_iter() }
    }
}

impl<F: FileSystem + ?Sized> Iterator for Walk<'_, F> {
    type Item = io::Result<DirEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.pending.next() {
                if self.ignore.contains(&entry.name()) {
                    trace!("Pruning ignored entry: {}", entry.path.display());
                    continue;
                }
                if entry.is_dir() {
                    self.stack.push(entry.path.clone());
                }
                return Some(Ok(entry));
            }

            let dir = self.stack.pop()?;
            trace!("Reading directory: {}", dir.display());
            match self.fs.read_dir(&dir) {
                Ok(entries) => self.pending = entries.into_iter(),
                Err(e) => {
                    return Some(Err(io::Error::new(e.kind(), format!("{}: {}", dir.display(), e))));
                }
            }
        }
    }
}
