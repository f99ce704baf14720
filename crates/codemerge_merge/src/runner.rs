use anyhow::Result;
use codemerge_core::FileSystem;
use log::{debug, info, warn};
use std::path::Path;

use crate::{
    collector::{CollectorConfig, absolutize, collect_files, resolve_explicit_files},
    config::Config,
    merger::{MergeOptions, merge_to_string},
    types::{MergeMode, MergeOutcome},
};

/// Collect (or validate) the files selected by `cfg` and merge them.
///
/// Relative paths in `cfg` are resolved against `cwd`. In explicit-files
/// mode the headers are relative to `cwd`, otherwise to the scanned folder.
pub fn run_merge<F: FileSystem + ?Sized>(cfg: &Config, fs: &F, cwd: &Path) -> Result<MergeOutcome> {
    info!("Starting merge");

    let ignore = cfg.ignore_set();
    let extensions = cfg.extension_set();
    info!("Ignoring directories: {:?}", ignore.iter().collect::<Vec<_>>());
    debug!("Extensions: {:?}", extensions.iter().collect::<Vec<_>>());
    if extensions.is_empty() {
        warn!("No extensions configured, no file can match");
    }

    let (mode, root, files) = match cfg.explicit_files() {
        Some(list) => {
            info!("Mode: specific files ({} given)", list.len());
            let files = resolve_explicit_files(fs, cwd, list, &extensions)?;
            (MergeMode::ExplicitFiles, cwd.to_path_buf(), files)
        }
        None => {
            let root = absolutize(cwd, &cfg.path);
            info!("Mode: scan folder {}", root.display());
            let collector_cfg = CollectorConfig {
                root: root.clone(),
                extensions,
                ignore: ignore.clone(),
                git_ignore: cfg.gitignore,
            };
            let files = collect_files(fs, &collector_cfg)?;
            (MergeMode::Scan, root, files)
        }
    };

    if files.is_empty() {
        warn!("No files matched under {}", root.display());
    }

    let opts = MergeOptions { header_prefix: cfg.header_prefix.clone() };
    let text = merge_to_string(fs, &files, &root, &opts)?;
    info!("Merged {} files into {} bytes", files.len(), text.len());

    Ok(MergeOutcome { text, files, root, mode, ignore })
}
