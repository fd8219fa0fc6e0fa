//! # Hiding an Implementation Behind an Abstraction
//!
//! Five near-identical ways to wrap directory listing behind an interface,
//! from a plain concrete type to a factory function that never exposes the
//! implementation at all:
//!
//! ## Variant 1: Concrete Type
//! - A struct with the listing logic as a method
//! - The same logic as a free function
//!
//! ## Variant 2: Trait and Implementation
//! - A `FileSystem` trait with a public implementing type
//!
//! ## Variant 3: The Leaky Binding
//! - Why call sites still end up coupled to the concrete type
//!
//! ## Variant 4: Hidden Constructor
//! - Private fields, with the associated constructor returning the trait
//!
//! ## Variant 5: Factory Function
//! - A free function named after the capability, returning `impl Trait`
//!
//! Run examples with: `cargo run --example <name>`
//!
//! This crate's own API is the variant 5 form: the [`FileSystem`] trait and
//! the [`file_system`] factory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only view of a directory's immediate children.
pub trait FileSystem {
    /// The child entries that are themselves directories.
    fn directories(&self) -> io::Result<Vec<PathBuf>>;
}

/// Builds a [`FileSystem`] over `dir`. When `include_hidden` is false,
/// entries whose name starts with `.` are dropped.
pub fn file_system(dir: impl Into<PathBuf>, include_hidden: bool) -> impl FileSystem {
    LocalFileSystem {
        dir: dir.into(),
        include_hidden,
    }
}

struct LocalFileSystem {
    dir: PathBuf,
    include_hidden: bool,
}

impl FileSystem for LocalFileSystem {
    fn directories(&self) -> io::Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_dir() && (self.include_hidden || !is_hidden(&path)) {
                dirs.push(path);
            }
        }
        Ok(dirs)
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
