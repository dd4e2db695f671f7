//! Driven (output) ports - implemented by infrastructure.
//!
//! The `lumiforge-adapters` crate provides implementations.
//!
//! ## Design Notes
//!
//! Methods return `io::Result` rather than [`super::ScaffoldError`]:
//! the same I/O failure maps to a different engine error depending on
//! which step triggered it (directory creation vs artifact write vs
//! tree copy), and that mapping belongs at the call-site in the engine.

use std::io;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `lumiforge_adapters::filesystem::LocalFilesystem` (production)
/// - `lumiforge_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write content to a file, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Read an entire file as UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Recursively copy `src` to `dst`, preserving relative structure
    /// and file contents byte-for-byte. Returns the number of files
    /// copied.
    ///
    /// Fails with `NotFound` if `src` does not exist and with
    /// `AlreadyExists` if `dst` does; the copy never merges into an
    /// existing destination.
    fn copy_tree(&self, src: &Path, dst: &Path) -> io::Result<u64>;
}
