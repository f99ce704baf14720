//! Core utilities for the codemerge tools.
//!
//! This crate provides the pieces shared by the merge and tree tools:
//! - A `FileSystem` seam with a real (`DiskFs`) and an in-memory (`MemoryFs`) backend
//! - A lazy directory walk that prunes ignored names without descending into them
//! - The `IgnoreSet` / `ExtensionSet` filters and the `FileEntry` type
//! - Default ignore names and extensions, supplied to the tools by their configs
//! - The error type for missing paths, rejected files and read failures

mod constants;
mod disk;
mod error;
mod fs;
mod memory;
mod types;

// Re-export public API
pub use constants::{DEFAULT_EXTENSIONS, DEFAULT_HEADER_PREFIX, DEFAULT_IGNORE_DIRS};
pub use disk::DiskFs;
pub use error::{Error, Result};
pub use fs::{DirEntry, EntryKind, FileSystem, Walk, WalkOptions};
pub use memory::MemoryFs;
pub use types::{ExtensionSet, FileEntry, IgnoreSet};
