use codemerge_core::{
    EntryKind, Error, ExtensionSet, FileEntry, FileSystem, IgnoreSet, Result, WalkOptions,
};
use log::{debug, trace, warn};
use path_clean::clean;
use std::path::{Path, PathBuf};

pub struct CollectorConfig {
    pub root: PathBuf,
    pub extensions: ExtensionSet,
    pub ignore: IgnoreSet,
    pub git_ignore: bool,
}

/// Walk `cfg.root` and return every regular file with an allowed suffix,
/// sorted by path and without duplicates.
pub fn collect_files<F: FileSystem + ?Sized>(
    fs: &F,
    cfg: &CollectorConfig,
) -> Result<Vec<FileEntry>> {
    debug!("Collecting files");
    let root = &cfg.root;
    if !fs.exists(root) {
        return Err(Error::PathNotFound(root.clone()));
    }

    let opts = WalkOptions { ignore: cfg.ignore.clone(), git_ignore: cfg.git_ignore };
    let mut files: Vec<FileEntry> = Vec::new();

    for res in fs.walk(root, &opts) {
        let entry = match res {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.is_file() {
            continue;
        }

        // The walk prunes ignored names already; this also covers walkers that don't
        let rel = entry.path.strip_prefix(root).unwrap_or(&entry.path);
        if cfg.ignore.matches_path(rel) {
            trace!("Skipping ignored path: {}", rel.display());
            continue;
        }

        let Some(extension) = cfg.extensions.matching_path(&entry.path).map(str::to_string)
        else {
            trace!("Skipping file with unlisted extension: {}", entry.path.display());
            continue;
        };

        trace!("Found file: {}", entry.path.display());
        files.push(FileEntry { path: entry.path, extension });
    }

    files.sort();
    files.dedup_by(|a, b| a.path == b.path);
    debug!("Collected {} files", files.len());
    Ok(files)
}

/// Validate a user-supplied file list, keeping its order.
pub fn resolve_explicit_files<F: FileSystem + ?Sized>(
    fs: &F,
    cwd: &Path,
    files: &[PathBuf],
    extensions: &ExtensionSet,
) -> Result<Vec<FileEntry>> {
    debug!("Resolving {} explicit files", files.len());
    files
        .iter()
        .map(|file| {
            let path = absolutize(cwd, file);
            trace!("Checking explicit file: {}", path.display());
            match fs.kind(&path) {
                Err(_) => return Err(Error::PathNotFound(path)),
                Ok(EntryKind::Dir | EntryKind::Other) => return Err(Error::NotAFile(path)),
                Ok(EntryKind::File | EntryKind::Symlink) => {}
            }

            match extensions.matching_path(&path).map(str::to_string) {
                Some(extension) => Ok(FileEntry { path, extension }),
                None => Err(Error::InvalidExtension(path)),
            }
        })
        .collect()
}

/// Join `path` onto `cwd` and normalize `.` and `..` lexically.
pub(crate) fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    PathBuf::from(clean(cwd.join(path).to_string_lossy().to_string()))
}
