use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
};

use crate::fs::{DirEntry, EntryKind, FileSystem};

const MAX_LINK_HOPS: usize = 40;

#[derive(Debug, Clone)]
enum Node {
    File(Vec<u8>),
    Dir { readable: bool },
    Symlink(PathBuf),
}

impl Node {
    fn kind(&self) -> EntryKind {
        match self {
            Node::File(_) => EntryKind::File,
            Node::Dir { .. } => EntryKind::Dir,
            Node::Symlink(_) => EntryKind::Symlink,
        }
    }
}

/// In-memory filesystem for tests. Adding an entry creates its parent directories.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    nodes: BTreeMap<PathBuf, Node>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> &mut Self {
        self.insert(path.as_ref(), Node::File(contents.as_ref().to_vec()))
    }

    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.insert(path.as_ref(), Node::Dir { readable: true })
    }

    /// A directory whose listing fails with `PermissionDenied`.
    pub fn add_unreadable_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.insert(path.as_ref(), Node::Dir { readable: false })
    }

    pub fn add_symlink(&mut self, path: impl AsRef<Path>, target: impl AsRef<Path>) -> &mut Self {
        self.insert(path.as_ref(), Node::Symlink(target.as_ref().to_path_buf()))
    }

    fn insert(&mut self, path: &Path, node: Node) -> &mut Self {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir { readable: true });
        }
        self.nodes.insert(path.to_path_buf(), node);
        self
    }

    fn get(&self, path: &Path) -> io::Result<&Node> {
        self.nodes.get(path).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{}: not found", path.display()))
        })
    }
}

impl FileSystem for MemoryFs {
    fn kind(&self, path: &Path) -> io::Result<EntryKind> {
        Ok(self.get(path)?.kind())
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        match self.get(path)? {
            Node::Dir { readable: true } => Ok(self
                .nodes
                .iter()
                .filter(|(p, _)| p.parent() == Some(path))
                .map(|(p, node)| DirEntry::new(p.clone(), node.kind()))
                .collect()),
            Node::Dir { readable: false } => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{}: permission denied", path.display()),
            )),
            _ => Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{}: not a directory", path.display()),
            )),
        }
    }

    fn is_file_following(&self, path: &Path) -> bool {
        let mut current = path;
        // Bounded so that link cycles end up as "not a file"
        for _ in 0..MAX_LINK_HOPS {
            match self.nodes.get(current) {
                Some(Node::File(_)) => return true,
                Some(Node::Symlink(target)) => current = target,
                _ => return false,
            }
        }
        false
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        match self.get(path)? {
            Node::File(contents) => Ok(contents.clone()),
            Node::Symlink(target) => self.read(target),
            Node::Dir { .. } => Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("{}: is a directory", path.display()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_file_creates_parents() {
        let mut fs = MemoryFs::new();
        fs.add_file("/p/src/a.ts", "a");

        assert_eq!(fs.kind(Path::new("/p")).unwrap(), EntryKind::Dir);
        assert_eq!(fs.kind(Path::new("/p/src")).unwrap(), EntryKind::Dir);
        assert_eq!(fs.read(Path::new("/p/src/a.ts")).unwrap(), b"a");
    }

    #[test]
    fn test_read_dir_lists_only_direct_children() {
        let mut fs = MemoryFs::new();
        fs.add_file("/p/a.ts", "").add_file("/p/lib/b.ts", "").add_dir("/p/empty");

        let names: Vec<String> =
            fs.read_dir(Path::new("/p")).unwrap().iter().map(|e| e.name().into_owned()).collect();
        assert_eq!(names, vec!["a.ts", "empty", "lib"]);
    }

    #[test]
    fn test_unreadable_dir_denies_listing() {
        let mut fs = MemoryFs::new();
        fs.add_unreadable_dir("/p/secret");

        let err = fs.read_dir(Path::new("/p/secret")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_missing_paths() {
        let fs = MemoryFs::new();
        assert!(!fs.exists(Path::new("/nope")));
        assert_eq!(fs.read(Path::new("/nope")).unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_symlink_reads_target() {
        let mut fs = MemoryFs::new();
        fs.add_file("/p/real.ts", "real").add_symlink("/p/link.ts", "/p/real.ts");

        assert_eq!(fs.kind(Path::new("/p/link.ts")).unwrap(), EntryKind::Symlink);
        assert_eq!(fs.read(Path::new("/p/link.ts")).unwrap(), b"real");
    }

    #[test]
    fn test_is_file_following_resolves_links() {
        let mut fs = MemoryFs::new();
        fs.add_file("/p/real.ts", "")
            .add_symlink("/p/alias.ts", "/p/real.ts")
            .add_symlink("/p/chain.ts", "/p/alias.ts")
            .add_symlink("/p/dirlink", "/p")
            .add_symlink("/p/loop", "/p/loop")
            .add_symlink("/p/dangling", "/p/gone.ts");

        assert!(fs.is_file_following(Path::new("/p/real.ts")));
        assert!(fs.is_file_following(Path::new("/p/alias.ts")));
        assert!(fs.is_file_following(Path::new("/p/chain.ts")));
        assert!(!fs.is_file_following(Path::new("/p/dirlink")));
        assert!(!fs.is_file_following(Path::new("/p/loop")));
        assert!(!fs.is_file_following(Path::new("/p/dangling")));
        assert!(!fs.is_file_following(Path::new("/p")));
    }
}
