use codemerge_core::{DEFAULT_HEADER_PREFIX, Error, FileEntry, FileSystem, Result};
use log::{debug, trace};
use std::{
    borrow::Cow,
    path::{MAIN_SEPARATOR, Path},
};

#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Comment marker placed before each header path
    pub header_prefix: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self { header_prefix: DEFAULT_HEADER_PREFIX.to_string() }
    }
}

/// Concatenate `files` in the given order, each preceded by a header line
/// carrying its path relative to `root`.
///
/// Each file contributes `"<prefix> <path>\n<content>\n"`; files are separated
/// by one blank line. An empty list yields an empty string.
pub fn merge_to_string<F: FileSystem + ?Sized>(
    fs: &F,
    files: &[FileEntry],
    root: &Path,
    opts: &MergeOptions,
) -> Result<String> {
    debug!("Merging {} files relative to {}", files.len(), root.display());
    let mut parts: Vec<String> = Vec::with_capacity(files.len() * 3);

    for file in files {
        let header = display_header(&file.path, root);
        trace!("Merging file: {}", header);
        parts.push(format!("{} {}", opts.header_prefix, header));

        let bytes =
            fs.read(&file.path).map_err(|source| Error::Io { path: file.path.clone(), source })?;
        let content = normalize_newlines(decode_dropping_invalid(&bytes));
        parts.push(content.trim_end().to_string());
        parts.push(String::new());
    }

    Ok(parts.join("\n"))
}

/// POSIX-style path of `path` relative to `root`, or the absolute path when
/// `path` is not under `root`.
pub fn display_header(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => to_posix(rel),
        Err(_) => to_posix(path),
    }
}

fn to_posix(path: &Path) -> String {
    path.to_string_lossy().replace(MAIN_SEPARATOR, "/")
}

/// Decode UTF-8, silently dropping malformed byte sequences.
fn decode_dropping_invalid(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => {
            let mut out = String::with_capacity(bytes.len());
            for chunk in bytes.utf8_chunks() {
                out.push_str(chunk.valid());
            }
            Cow::Owned(out)
        }
    }
}

fn normalize_newlines(text: Cow<'_, str>) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        text
    }
}
