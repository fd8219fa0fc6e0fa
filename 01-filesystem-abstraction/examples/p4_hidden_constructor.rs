//! Variant 4: Hidden Constructor
//! Example: The constructor itself returns the abstraction
//!
//! Run with: cargo run --example p4_hidden_constructor

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
    // Callers get back `impl FileSystem`, so the binding below is opaque
    // even without an annotation.
    pub fn new(dir: impl Into<PathBuf>, include_hidden: bool) -> impl FileSystem {
        LocalFileSystem {
            dir: dir.into(),
            include_hidden,
        }
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
    println!("=== Constructing Through the Hidden Constructor ===");
    // `fs` is an opaque FileSystem; LocalFileSystem's inherent surface
    // is out of reach.
    let fs = LocalFileSystem::new(".", true);
    for dir in fs.directories()? {
        println!("  {}", dir.display());
    }

    Ok(())
}
