//! Shared test utilities for integration tests

use std::fs;
use std::path::{Path, PathBuf};

/// Create every path in `dirs` as a directory and every path in `files` as an empty file.
pub fn build_tree(root: &Path, dirs: &[&str], files: &[&str]) {
    for dir in dirs {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
    for file in files {
        let path = root.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }
}

/// Every path under `root`, relative to it, sorted.
pub fn list_tree(root: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.unwrap().path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    paths.sort();
    paths
}
