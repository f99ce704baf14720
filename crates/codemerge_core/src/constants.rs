//! Default configuration values.
//!
//! The core algorithms never read these directly; callers (the clap configs in
//! `codemerge_merge` and `codemerge_tree`) use them to fill in their defaults.

/// File suffixes merged when no `--ext` is given
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".ts",  // TypeScript
    ".tsx", // TypeScript with JSX
];

/// Directory names skipped by both the collector and the tree printer
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    "node_modules",
    ".next",
    ".git",
    "dist",
    "build",
    ".codesandbox",
    ".devcontainer",
];

/// Comment marker written before each merged file's path
pub const DEFAULT_HEADER_PREFIX: &str = "//";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extensions_are_dotted() {
        for ext in DEFAULT_EXTENSIONS {
            assert!(ext.starts_with('.'), "extension '{}' should start with a dot", ext);
        }
    }

    #[test]
    fn test_default_ignore_dirs_are_plain_names() {
        for name in DEFAULT_IGNORE_DIRS {
            assert!(!name.contains('/'), "ignore entry '{}' should be a single segment", name);
        }
        assert!(DEFAULT_IGNORE_DIRS.contains(&"node_modules"));
        assert!(DEFAULT_IGNORE_DIRS.contains(&".git"));
    }
}
