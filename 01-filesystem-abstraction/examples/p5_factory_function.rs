//! Variant 5: Factory Function
//! Example: A free function named after the capability, returning `impl Trait`
//!
//! Run with: cargo run --example p5_factory_function

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub trait FileSystem {
    fn directories(&self) -> io::Result<Vec<PathBuf>>;
}

// The implementing type is private to this module; the factory is the only
// construction path.
pub fn file_system(dir: impl Into<PathBuf>, include_hidden: bool) -> impl FileSystem {
    struct Local {
        dir: PathBuf,
        include_hidden: bool,
    }

    impl FileSystem for Local {
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

    Local {
        dir: dir.into(),
        include_hidden,
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

fn main() -> io::Result<()> {
    println!("=== Constructing Through the Factory Function ===");
    let fs = file_system(".", true);
    for dir in fs.directories()? {
        println!("  {}", dir.display());
    }

    println!("\n=== Hidden Entries Excluded ===");
    let fs = file_system(".", false);
    for dir in fs.directories()? {
        println!("  {}", dir.display());
    }

    Ok(())
}
