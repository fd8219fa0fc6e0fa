//! Variant 3: The Leaky Binding
//! Example: Why the trait alone does not stop call sites seeing the concrete type
//!
//! Run with: cargo run --example p3_leaky_binding

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub trait FileSystem {
    fn directories(&self) -> io::Result<Vec<PathBuf>>;
}

pub struct LocalFileSystem {
    dir: PathBuf,
    include_hidden: bool,
}

impl LocalFileSystem {
    pub fn new(dir: impl Into<PathBuf>, include_hidden: bool) -> Self {
        LocalFileSystem {
            dir: dir.into(),
            include_hidden,
        }
    }

    // An inherent method the trait knows nothing about.
    pub fn flush_caches(&self) {
        println!("  flushing caches under {}", self.dir.display());
    }
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

fn main() -> io::Result<()> {
    println!("=== Inference Picks the Concrete Type ===");
    // `fs` is a LocalFileSystem here, not a FileSystem, so nothing stops
    // this call site reaching past the abstraction.
    let fs = LocalFileSystem::new(".", true);
    fs.flush_caches();
    println!("  listed {} directories", fs.directories()?.len());

    println!("\n=== Opting Back Into the Abstraction ===");
    // Only an explicit annotation hides the implementation again.
    let fs: &dyn FileSystem = &LocalFileSystem::new(".", true);
    println!("  listed {} directories", fs.directories()?.len());
    // fs.flush_caches() no longer compiles

    Ok(())
}
