//! Infrastructure adapters for Lumiforge.
//!
//! This crate implements the `Filesystem` port defined in
//! `lumiforge_core::scaffold::ports`. It contains all external
//! dependencies and I/O operations.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
