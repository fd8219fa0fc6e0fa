//! Variant 2: Trait and Implementation
//! Example: The listing operation behind a trait, with a public implementing type
//!
//! Run with: cargo run --example p2_trait_and_impl

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

// Callers can now depend on the trait alone.
fn print_directories(fs: &dyn FileSystem) -> io::Result<()> {
    for dir in fs.directories()? {
        println!("  {}", dir.display());
    }
    Ok(())
}

fn main() -> io::Result<()> {
    println!("=== Listing Through the Trait ===");
    let local = LocalFileSystem::new(".", true);
    print_directories(&local)?;

    Ok(())
}
