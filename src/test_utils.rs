//! Test utilities for building directory fixtures.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory for testing.
///
/// Provides methods for creating files, directories and symlinks.
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create a symlink at `link` (relative to the root) pointing at `target`.
    ///
    /// `target` is stored verbatim, so relative targets resolve from the
    /// link's own directory.
    #[cfg(unix)]
    pub fn add_symlink(&self, target: &str, link: &str) -> PathBuf {
        let link_path = self.dir.path().join(link);
        if let Some(parent) = link_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::os::unix::fs::symlink(target, &link_path).expect("Failed to create symlink");
        link_path
    }

    /// Build a nested chain `d1/d2/.../dN`, each level holding one file.
    pub fn add_chain(&self, depth: usize) -> PathBuf {
        let mut rel = PathBuf::new();
        for level in 1..=depth {
            rel.push(format!("d{}", level));
            self.add_file(
                &rel.join(format!("f{}.txt", level)).to_string_lossy(),
                "",
            );
        }
        self.dir.path().join(rel)
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
