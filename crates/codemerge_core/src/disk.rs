use ignore::WalkBuilder;
use log::{debug, trace};
use std::{fs, io, path::Path};

use crate::fs::{DirEntry, EntryKind, FileSystem, WalkOptions};

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFs;

impl FileSystem for DiskFs {
    fn kind(&self, path: &Path) -> io::Result<EntryKind> {
        Ok(fs::symlink_metadata(path)?.file_type().into())
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            entries.push(DirEntry::new(entry.path(), entry.file_type()?.into()));
        }
        Ok(entries)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn is_file_following(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|m| m.is_file())
    }

    fn walk<'a>(
        &'a self,
        root: &Path,
        opts: &WalkOptions,
    ) -> Box<dyn Iterator<Item = io::Result<DirEntry>> + 'a> {
        debug!("Walking directory tree from root: {} (gitignore: {})", root.display(), opts.git_ignore);
        let mut builder = WalkBuilder::new(root);
        builder.standard_filters(false).follow_links(false);
        if opts.git_ignore {
            builder.git_ignore(true).git_exclude(true).ignore(true).parents(true).require_git(false);
        }

        let ignore = opts.ignore.clone();
        builder.filter_entry(move |dent| {
            let name = dent.file_name().to_string_lossy();
            if ignore.contains(&name) {
                trace!("Pruning ignored entry: {}", dent.path().display());
                return false;
            }
            true
        });

        Box::new(builder.build().filter_map(|res| match res {
            Ok(dent) if dent.depth() == 0 => None,
            Ok(dent) => {
                let kind = dent.file_type().map(EntryKind::from).unwrap_or(EntryKind::Other);
                Some(Ok(DirEntry::new(dent.into_path(), kind)))
            }
            Err(err) => Some(Err(into_io_error(err))),
        }))
    }
}

fn into_io_error(err: ignore::Error) -> io::Error {
    let message = err.to_string();
    match err.into_io_error() {
        Some(io_err) => io::Error::new(io_err.kind(), message),
        None => io::Error::other(message),
    }
}
