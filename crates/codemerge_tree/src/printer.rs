use std::{
    io::{self, ErrorKind, Write},
    path::Path,
};

use codemerge_core::{DirEntry, FileSystem, IgnoreSet};
use colored::Colorize;
use log::{debug, trace};

#[derive(Debug, Clone, Default)]
pub struct TreeOptions {
    pub ignore: IgnoreSet,
    /// Colour directory names
    pub color: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
}

/// Print `root` followed by its contents as an ASCII tree.
///
/// At each level directories come before files, each group sorted
/// case-insensitively. Ignored names are neither printed nor descended into,
/// and directories that cannot be listed for lack of permission show as empty.
pub fn print_tree<W: Write, F: FileSystem + ?Sized>(
    writer: &mut W,
    fs: &F,
    root: &Path,
    opts: &TreeOptions,
) -> io::Result<TreeStats> {
    debug!("Printing tree for {}", root.display());
    writeln!(writer, "{}", root.display())?;

    let mut stats = TreeStats::default();
    print_level(writer, fs, root, "", opts, &mut stats)?;
    writer.flush()?;

    debug!("Printed {} directories and {} files", stats.directories, stats.files);
    Ok(stats)
}

fn print_level<W: Write, F: FileSystem + ?Sized>(
    writer: &mut W,
    fs: &F,
    dir: &Path,
    prefix: &str,
    opts: &TreeOptions,
    stats: &mut TreeStats,
) -> io::Result<()> {
    let entries = sorted_children(fs, dir, &opts.ignore)?;
    let count = entries.len();

    for (idx, entry) in entries.iter().enumerate() {
        let is_last = idx + 1 == count;
        let connector = if is_last { "└── " } else { "├── " };
        let name = entry.name();

        if entry.is_dir() {
            stats.directories += 1;
            let label = if opts.color { name.blue().bold().to_string() } else { name.into_owned() };
            writeln!(writer, "{}{}{}", prefix, connector, label)?;

            let extension = if is_last { "    " } else { "│   " };
            print_level(writer, fs, &entry.path, &format!("{}{}", prefix, extension), opts, stats)?;
        } else {
            stats.files += 1;
            writeln!(writer, "{}{}{}", prefix, connector, name)?;
        }
    }
    Ok(())
}

fn sorted_children<F: FileSystem + ?Sized>(
    fs: &F,
    dir: &Path,
    ignore: &IgnoreSet,
) -> io::Result<Vec<DirEntry>> {
    let mut entries = match fs.read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            debug!("Skipping unreadable directory: {}", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    entries.retain(|entry| {
        let keep = !ignore.contains(&entry.name());
        if !keep {
            trace!("Skipping ignored entry: {}", entry.path.display());
        }
        keep
    });
    // Links to files sort with the files; they are still never descended into
    entries.sort_by_cached_key(|entry| {
        let name = entry.name().into_owned();
        (fs.is_file_following(&entry.path), name.to_lowercase(), name)
    });
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use codemerge_core::{DiskFs, MemoryFs};
    use std::fs;
    use tempfile::TempDir;

    fn render(fs: &MemoryFs, root: &str, ignore: &[&str]) -> (String, TreeStats) {
        let opts = TreeOptions { ignore: IgnoreSet::new(ignore.iter().copied()), color: false };
        let mut buf = Vec::new();
        let stats = print_tree(&mut buf, fs, Path::new(root), &opts).unwrap();
        (String::from_utf8(buf).unwrap(), stats)
    }

    #[test]
    fn test_directories_before_files() {
        let mut fs = MemoryFs::new();
        fs.add_dir("/p/zeta").add_file("/p/alpha.ts", "");

        let (out, stats) = render(&fs, "/p", &[]);
        assert_eq!(out, "/p\n├── zeta\n└── alpha.ts\n");
        assert_eq!(stats, TreeStats { directories: 1, files: 1 });
    }

    #[test]
    fn test_nested_prefixes() {
        let mut fs = MemoryFs::new();
        fs.add_file("/p/app/page.tsx", "")
            .add_file("/p/app/ui/Button.tsx", "")
            .add_file("/p/lib/util.ts", "")
            .add_file("/p/README.md", "");

        let (out, _) = render(&fs, "/p", &[]);
        let expected = "\
/p
├── app
│   ├── ui
│   │   └── Button.tsx
│   └── page.tsx
├── lib
│   └── util.ts
└── README.md
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_last_directory_uses_blank_continuation() {
        let mut fs = MemoryFs::new();
        fs.add_file("/p/src/main.ts", "");

        let (out, _) = render(&fs, "/p", &[]);
        assert_eq!(out, "/p\n└── src\n    └── main.ts\n");
    }

    #[test]
    fn test_case_insensitive_order() {
        let mut fs = MemoryFs::new();
        fs.add_file("/p/beta.ts", "").add_file("/p/Alpha.ts", "").add_file("/p/Gamma.ts", "");

        let (out, _) = render(&fs, "/p", &[]);
        assert_eq!(out, "/p\n├── Alpha.ts\n├── beta.ts\n└── Gamma.ts\n");
    }

    #[test]
    fn test_ignored_names_are_not_printed_or_descended() {
        let mut fs = MemoryFs::new();
        fs.add_file("/p/node_modules/react/index.js", "")
            .add_file("/p/src/index.ts", "")
            .add_file("/p/.git/HEAD", "");

        let (out, stats) = render(&fs, "/p", &["node_modules", ".git"]);
        assert!(!out.contains("node_modules"));
        assert!(!out.contains("react"));
        assert!(!out.contains(".git"));
        assert!(!out.contains("HEAD"));
        assert_eq!(out, "/p\n└── src\n    └── index.ts\n");
        assert_eq!(stats, TreeStats { directories: 1, files: 1 });
    }

    #[test]
    fn test_ignored_last_entry_does_not_steal_last_connector() {
        let mut fs = MemoryFs::new();
        fs.add_dir("/p/app").add_file("/p/zz/x.ts", "").add_file("/p/a.ts", "");

        let (out, _) = render(&fs, "/p", &["zz"]);
        assert_eq!(out, "/p\n├── app\n└── a.ts\n");
    }

    #[test]
    fn test_unreadable_directory_is_empty() {
        let mut fs = MemoryFs::new();
        fs.add_unreadable_dir("/p/locked").add_file("/p/open.ts", "");

        let (out, stats) = render(&fs, "/p", &[]);
        assert_eq!(out, "/p\n├── locked\n└── open.ts\n");
        assert_eq!(stats, TreeStats { directories: 1, files: 1 });
    }

    #[test]
    fn test_symlinks_are_listed_but_not_followed() {
        let mut fs = MemoryFs::new();
        fs.add_file("/p/real/a.ts", "").add_symlink("/p/link", "/p/real");

        let (out, _) = render(&fs, "/p", &[]);
        assert_eq!(out, "/p\n├── link\n└── real\n    └── a.ts\n");
    }

    #[test]
    fn test_links_to_files_sort_with_files() {
        let mut fs = MemoryFs::new();
        fs.add_dir("/p/zdir").add_file("/p/real.ts", "").add_symlink("/p/alias.ts", "/p/real.ts");

        let (out, stats) = render(&fs, "/p", &[]);
        assert_eq!(out, "/p\n├── zdir\n├── alias.ts\n└── real.ts\n");
        assert_eq!(stats, TreeStats { directories: 1, files: 2 });
    }

    #[cfg(unix)]
    #[test]
    fn test_links_to_files_sort_with_files_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("zdir")).unwrap();
        fs::write(root.join("real.ts"), "").unwrap();
        std::os::unix::fs::symlink(root.join("real.ts"), root.join("alias.ts")).unwrap();
        std::os::unix::fs::symlink(root.join("zdir"), root.join("dirlink")).unwrap();

        let mut buf = Vec::new();
        print_tree(&mut buf, &DiskFs, root, &TreeOptions::default()).unwrap();
        let out = String::from_utf8(buf).unwrap();

        let body: Vec<&str> = out.lines().skip(1).collect();
        assert_eq!(body, vec!["├── dirlink", "├── zdir", "├── alias.ts", "└── real.ts"]);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let fs = MemoryFs::new();
        let mut buf = Vec::new();
        let result = print_tree(&mut buf, &fs, Path::new("/nope"), &TreeOptions::default());
        assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_print_tree_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("src/components")).unwrap();
        fs::create_dir_all(root.join("dist")).unwrap();
        fs::write(root.join("src/components/Card.tsx"), "").unwrap();
        fs::write(root.join("package.json"), "{}").unwrap();
        fs::write(root.join("dist/bundle.js"), "").unwrap();

        let opts = TreeOptions { ignore: IgnoreSet::new(["dist"]), color: false };
        let mut buf = Vec::new();
        let stats = print_tree(&mut buf, &DiskFs, root, &opts).unwrap();
        let out = String::from_utf8(buf).unwrap();

        let body: Vec<&str> = out.lines().skip(1).collect();
        assert_eq!(body, vec!["├── src", "│   └── components", "│       └── Card.tsx", "└── package.json"]);
        assert_eq!(stats, TreeStats { directories: 2, files: 2 });
    }
}
