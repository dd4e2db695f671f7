//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use lumiforge_core::scaffold::Filesystem;

/// In-memory filesystem for testing.
///
/// Clones share the same backing store, so a test can hold one handle
/// while the scaffolder owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    // Paths that fail every write; lets tests exercise partial failure.
    poisoned: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating parent directories (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            add_dir_chain(&mut inner.directories, parent);
        }
        inner.files.insert(path, content.to_string());
    }

    /// Seed an empty directory (testing helper).
    pub fn seed_dir(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        add_dir_chain(&mut inner.directories, &path.into());
    }

    /// Make every write to `path` fail (testing helper).
    pub fn poison(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().poisoned.insert(path.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.inner.read().unwrap().files.get(path).cloned()
    }

    /// List all files, sorted (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner.read().unwrap().files.keys().cloned().collect()
    }

    /// `true` when nothing has been written at all.
    pub fn is_empty(&self) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.is_empty() && inner.directories.is_empty()
    }
}

fn add_dir_chain(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut inner = self.inner.write().unwrap();
        if inner.poisoned.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "poisoned path",
            ));
        }
        add_dir_chain(&mut inner.directories, path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        let mut inner = self.inner.write().unwrap();
        if inner.poisoned.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "poisoned path",
            ));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    "parent directory does not exist",
                ));
            }
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.inner
            .read()
            .unwrap()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn copy_tree(&self, src: &Path, dst: &Path) -> io::Result<u64> {
        let mut inner = self.inner.write().unwrap();

        if !inner.directories.contains(src) && !inner.files.contains_key(src) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "source does not exist",
            ));
        }
        let dst_occupied = inner.directories.contains(dst)
            || inner.files.contains_key(dst)
            || inner.files.keys().any(|p| p.starts_with(dst));
        if dst_occupied {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "destination already exists",
            ));
        }

        let copied: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter(|(p, _)| p.starts_with(src))
            .map(|(p, c)| (dst.join(p.strip_prefix(src).unwrap()), c.clone()))
            .collect();
        let dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter(|p| p.starts_with(src))
            .map(|p| dst.join(p.strip_prefix(src).unwrap()))
            .collect();

        let files = copied.len() as u64;
        for dir in dirs {
            add_dir_chain(&mut inner.directories, &dir);
        }
        for (path, content) in copied {
            if let Some(parent) = path.parent() {
                add_dir_chain(&mut inner.directories, parent);
            }
            inner.files.insert(path, content);
        }
        Ok(files)
    }
}
