//! Path composition for renames.

use super::classifier::Classifier;
use serde::Serialize;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Source and destination of one rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathPair {
    pub old: PathBuf,
    pub new: PathBuf,
}

impl PathPair {
    pub fn new(old: PathBuf, new: PathBuf) -> Self {
        Self { old, new }
    }

    /// True when sanitizing left nothing of the name, so `new` is just the parent directory.
    pub fn has_empty_name(&self) -> bool {
        self.old.parent() == Some(self.new.as_path())
    }
}

/// Join `root_dir` with `name` and with its sanitized form.
///
/// No normalization beyond a plain join; `root_dir` is expected to be absolute.
/// Names that are not valid UTF-8 keep their raw bytes in `old`; the
/// sanitized name is computed from their lossy UTF-8 form.
pub fn resolve_paths(root_dir: &Path, name: &OsStr, classifier: &Classifier) -> PathPair {
    let old = root_dir.join(name);
    let new = root_dir.join(classifier.sanitize(&name.to_string_lossy()));
    PathPair { old, new }
}
