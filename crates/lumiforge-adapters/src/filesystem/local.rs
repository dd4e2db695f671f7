//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;
use walkdir::WalkDir;

use lumiforge_core::scaffold::Filesystem;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn copy_tree(&self, src: &Path, dst: &Path) -> io::Result<u64> {
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("source does not exist: {}", src.display()),
            ));
        }
        if dst.exists() {
            // All-or-nothing contract: never merge into an existing tree.
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("destination already exists: {}", dst.display()),
            ));
        }

        let mut files = 0u64;
        for entry in WalkDir::new(src) {
            let entry = entry.map_err(io::Error::from)?;
            let relative = entry
                .path()
                .strip_prefix(src)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            let target = dst.join(relative);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target)?;
            } else {
                trace!(from = %entry.path().display(), to = %target.display(), "copying file");
                if let Some(parent) = target.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::copy(entry.path(), &target)?;
                files += 1;
            }
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn populate_source(root: &Path) {
        std::fs::create_dir_all(root.join("nested/deep")).unwrap();
        std::fs::write(root.join("premake5.exe"), b"binary-ish bytes \x00\x01").unwrap();
        std::fs::write(root.join("nested/deep/notes.txt"), "hello").unwrap();
    }

    #[test]
    fn copy_tree_reproduces_structure_and_bytes() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("Tools");
        let dst = tmp.path().join("out/Tools");
        populate_source(&src);

        let fs = LocalFilesystem::new();
        let files = fs.copy_tree(&src, &dst).unwrap();
        assert_eq!(files, 2);

        assert_eq!(
            std::fs::read(dst.join("premake5.exe")).unwrap(),
            std::fs::read(src.join("premake5.exe")).unwrap()
        );
        assert_eq!(
            std::fs::read_to_string(dst.join("nested/deep/notes.txt")).unwrap(),
            "hello"
        );
    }

    #[test]
    fn copy_tree_rejects_existing_destination() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("Tools");
        let dst = tmp.path().join("existing");
        populate_source(&src);
        std::fs::create_dir_all(&dst).unwrap();
        std::fs::write(dst.join("keep.txt"), "untouched").unwrap();

        let fs = LocalFilesystem::new();
        let err = fs.copy_tree(&src, &dst).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);

        // Destination left untouched.
        assert_eq!(
            std::fs::read_to_string(dst.join("keep.txt")).unwrap(),
            "untouched"
        );
        assert!(!dst.join("premake5.exe").exists());
    }

    #[test]
    fn copy_tree_rejects_missing_source() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let err = fs
            .copy_tree(&tmp.path().join("nope"), &tmp.path().join("dst"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!tmp.path().join("dst").exists());
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a/b/c");
        let fs = LocalFilesystem::new();
        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();
        assert!(dir.is_dir());
    }
}
