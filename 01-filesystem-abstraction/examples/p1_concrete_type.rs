//! Variant 1: Concrete Type
//! Example: Directory listing as a plain struct, and as a free function
//!
//! Run with: cargo run --example p1_concrete_type

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub struct FileSystem {
    dir: PathBuf,
    include_hidden: bool,
}

impl FileSystem {
    pub fn new(dir: impl Into<PathBuf>, include_hidden: bool) -> Self {
        FileSystem {
            dir: dir.into(),
            include_hidden,
        }
    }

    pub fn directories(&self) -> io::Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_dir() && (self.include_hidden || !is_hidden(&path)) {
                dirs.push(path);
            }
        }
        Ok(dirs)
        // ... a real type would grow many more methods using the dir
    }
}

// The struct only exists to carry `dir` and a flag, so the same thing
// works as a free function.
pub fn directories(dir: &Path, include_hidden: bool) -> io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() && (include_hidden || !is_hidden(&path)) {
            dirs.push(path);
        }
    }
    Ok(dirs)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

fn main() -> io::Result<()> {
    println!("=== Method on a Concrete Type ===");
    let file_system = FileSystem::new(".", true);
    for dir in file_system.directories()? {
        println!("  {}", dir.display());
    }

    println!("\n=== Same Logic as a Free Function ===");
    for dir in directories(Path::new("."), true)? {
        println!("  {}", dir.display());
    }

    Ok(())
}
