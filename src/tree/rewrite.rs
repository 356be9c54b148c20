//! Rewrite driver: walk, classify, resolve collisions, dispatch.

use crate::action::RenameAction;
use crate::error::RmcharsError;
use crate::report::{Outcome, RunReport, SkipReason};
use crate::sanitize::{resolve_paths, Classifier, PathPair};
use crate::tree::walker::{Walker, WalkerConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Highest numeric suffix tried before giving up on a free name.
const MAX_SUFFIX: u32 = 10_000;

/// What to do when a sanitized name is taken or empty.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Abort the walk with an error.
    #[default]
    Fail,
    /// Leave the node untouched and keep walking.
    Skip,
    /// Append `_N` to the stem until the name is free. Empty names are skipped.
    Suffix,
}

enum Resolution {
    Proceed(PathPair),
    Skip(PathPair, SkipReason),
    /// The `Fail` policy rejects this rename.
    Conflict(PathPair, SkipReason),
}

/// Drives one bottom-up sanitizing pass over a tree.
pub struct Rewriter {
    classifier: Classifier,
    collision: CollisionPolicy,
    walker_config: WalkerConfig,
}

impl Rewriter {
    pub fn new(classifier: Classifier, collision: CollisionPolicy) -> Self {
        Self {
            classifier,
            collision,
            walker_config: WalkerConfig::default(),
        }
    }

    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    /// Sanitize every invalid name under `root`, handing each rename to `action`.
    ///
    /// The first error aborts the remaining walk; nodes already renamed stay
    /// renamed. Actions that never touch the disk get `Fail`-policy conflicts
    /// reported as [`Outcome::WouldFail`] and the walk goes on.
    pub fn run(
        &self,
        root: &Path,
        action: &mut dyn RenameAction,
    ) -> Result<RunReport, RmcharsError> {
        info!(root = %root.display(), policy = ?self.collision, "Starting bottom-up walk");

        let entries = Walker::with_config(root.to_path_buf(), self.walker_config.clone()).walk()?;
        let mut report = RunReport::new(root.to_path_buf());
        report.scanned = entries.len();
        let mut claimed: HashSet<PathBuf> = HashSet::new();

        for entry in &entries {
            if !self.classifier.is_invalid(&entry.name()) {
                continue;
            }

            let pair = resolve_paths(parent_of(entry.path(), root), entry.file_name(), &self.classifier);
            debug!(from = %pair.old.display(), to = %pair.new.display(), "Invalid name found");

            match self.resolve_collision(pair, &claimed) {
                Resolution::Proceed(pair) => {
                    let outcome = action.apply(&pair)?;
                    if matches!(outcome, Outcome::Renamed | Outcome::WouldRename) {
                        claimed.insert(pair.new.clone());
                    }
                    report.record(&pair, outcome);
                }
                Resolution::Skip(pair, reason) => {
                    warn!(path = %pair.old.display(), reason = ?reason, "Skipping rename");
                    report.record(&pair, Outcome::Skipped(reason));
                }
                Resolution::Conflict(pair, reason) => {
                    if action.mutates() {
                        return Err(conflict_error(pair, reason));
                    }
                    action.conflict(&pair, reason)?;
                    report.record(&pair, Outcome::WouldFail(reason));
                }
            }
        }

        let summary = report.summary();
        info!(
            scanned = summary.scanned,
            invalid = summary.invalid,
            renamed = summary.renamed,
            skipped = summary.skipped,
            "Walk finished"
        );
        Ok(report)
    }

    fn resolve_collision(&self, pair: PathPair, claimed: &HashSet<PathBuf>) -> Resolution {
        let taken = |path: &Path| claimed.contains(path) || path.symlink_metadata().is_ok();

        if pair.has_empty_name() {
            return match self.collision {
                CollisionPolicy::Fail => Resolution::Conflict(pair, SkipReason::EmptyName),
                CollisionPolicy::Skip | CollisionPolicy::Suffix => {
                    Resolution::Skip(pair, SkipReason::EmptyName)
                }
            };
        }

        if !taken(&pair.new) {
            return Resolution::Proceed(pair);
        }

        match self.collision {
            CollisionPolicy::Fail => Resolution::Conflict(pair, SkipReason::TargetExists),
            CollisionPolicy::Skip => Resolution::Skip(pair, SkipReason::TargetExists),
            CollisionPolicy::Suffix => {
                for n in 1..=MAX_SUFFIX {
                    let candidate = suffixed(&pair.new, n);
                    if !taken(&candidate) {
                        return Resolution::Proceed(PathPair::new(pair.old, candidate));
                    }
                }
                Resolution::Conflict(pair, SkipReason::TargetExists)
            }
        }
    }
}

fn conflict_error(pair: PathPair, reason: SkipReason) -> RmcharsError {
    match reason {
        SkipReason::EmptyName => RmcharsError::EmptyName { path: pair.old },
        SkipReason::TargetExists => RmcharsError::TargetExists {
            from: pair.old,
            to: pair.new,
        },
    }
}

fn parent_of<'a>(path: &'a Path, root: &'a Path) -> &'a Path {
    path.parent().unwrap_or(root)
}

/// `dir/stem.ext` -> `dir/stem_N.ext`
fn suffixed(path: &Path, n: u32) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, n, ext.to_string_lossy()),
        None => format!("{}_{}", stem, n),
    };
    path.with_file_name(name)
}
