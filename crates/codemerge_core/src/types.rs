use std::{
    collections::BTreeSet,
    path::{Component, Path, PathBuf},
};

/// A regular file selected for merging.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileEntry {
    pub path: PathBuf,
    /// The suffix from the extension set that matched
    pub extension: String,
}

/// Directory (or file) names excluded from traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    names: BTreeSet<String>,
}

impl IgnoreSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// True if any normal component of `rel` is an ignored name.
    pub fn matches_path(&self, rel: &Path) -> bool {
        rel.components().any(|c| match c {
            Component::Normal(part) => part.to_str().is_some_and(|p| self.contains(p)),
            _ => false,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// File suffixes eligible for merging, always stored with a leading dot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    suffixes: BTreeSet<String>,
}

impl ExtensionSet {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = suffixes
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty() && s != ".")
            .map(|s| if s.starts_with('.') { s } else { format!(".{}", s) })
            .collect();
        Self { suffixes }
    }

    /// Returns the longest suffix `file_name` ends with, if any.
    pub fn matching(&self, file_name: &str) -> Option<&str> {
        self.suffixes
            .iter()
            .filter(|s| file_name.ends_with(s.as_str()))
            .max_by_key(|s| s.len())
            .map(String::as_str)
    }

    /// Like [`ExtensionSet::matching`], applied to the file name of `path`.
    pub fn matching_path(&self, path: &Path) -> Option<&str> {
        self.matching(&path.file_name()?.to_string_lossy())
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.suffixes.iter().map(String::as_str)
    }
}
