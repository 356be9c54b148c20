//! Filesystem walker yielding directory contents before the directory itself

use crate::error::RmcharsError;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::ffi::OsStr;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Filesystem entry types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A regular file
    File { path: PathBuf },
    /// A directory, yielded after everything beneath it
    Directory { path: PathBuf },
    /// A symbolic link, never followed
    Symlink { path: PathBuf },
}

impl Entry {
    pub fn path(&self) -> &Path {
        match self {
            Entry::File { path } | Entry::Directory { path } | Entry::Symlink { path } => path,
        }
    }

    /// Basename of the entry.
    pub fn file_name(&self) -> &OsStr {
        self.path().file_name().unwrap_or_default()
    }

    /// Basename as text, lossy for names that are not valid UTF-8.
    pub fn name(&self) -> Cow<'_, str> {
        self.file_name().to_string_lossy()
    }
}

/// Filesystem walker configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Maximum depth to traverse (None = unlimited)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// Post-order filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the filesystem and collect all entries below the root.
    ///
    /// Every directory appears after all of its descendants. Within one
    /// directory, files and links come before subdirectories, each group sorted
    /// by name. The root itself is never yielded.
    pub fn walk(&self) -> Result<Vec<Entry>, RmcharsError> {
        let mut entries = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .min_depth(1)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .contents_first(true)
            .sort_by(files_before_directories);

        for entry in walker {
            let entry = entry?;
            let path = entry.path().to_path_buf();
            let file_type = entry.file_type();

            if file_type.is_dir() {
                entries.push(Entry::Directory { path });
            } else if file_type.is_symlink() {
                entries.push(Entry::Symlink { path });
            } else {
                entries.push(Entry::File { path });
            }
        }

        Ok(entries)
    }
}

fn files_before_directories(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_dir = a.file_type().is_dir();
    let b_dir = b.file_type().is_dir();
    a_dir.cmp(&b_dir).then_with(|| a.file_name().cmp(b.file_name()))
}
