//! Test-fixture generator
//!
//! Builds nested directories and files whose names embed every invalid
//! character of a platform plus emoji, so a sanitizing pass has something to
//! chew on.

use crate::error::RmcharsError;
use crate::sanitize::Platform;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Deepest fixture tree that may be requested.
pub const MAX_FIXTURE_DEPTH: u8 = 15;

/// Validated fixture depth, 1..=15.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureDepth(u8);

impl FixtureDepth {
    pub fn new(depth: i64) -> Result<Self, RmcharsError> {
        if depth < 1 {
            return Err(RmcharsError::Usage(format!("{} is less than 1!", depth)));
        }
        if depth > i64::from(MAX_FIXTURE_DEPTH) {
            return Err(RmcharsError::Usage(format!(
                "{} is too large... {} MAX!",
                depth, MAX_FIXTURE_DEPTH
            )));
        }
        Ok(Self(depth as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl FromStr for FixtureDepth {
    type Err = RmcharsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let depth = s
            .trim()
            .parse::<i64>()
            .map_err(|_| RmcharsError::Usage(format!("{} is not a valid integer.", s)))?;
        FixtureDepth::new(depth)
    }
}

/// Fan-out settings for deep fixture trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureConfig {
    /// Subdirectories descended into per level. None = all of them up to
    /// `wide_depth_limit`, one beyond it.
    #[serde(default)]
    pub branching: Option<usize>,

    /// Deepest tree that still fans out into every fixture directory.
    #[serde(default = "default_wide_depth_limit")]
    pub wide_depth_limit: u8,
}

fn default_wide_depth_limit() -> u8 {
    4
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            branching: None,
            wide_depth_limit: default_wide_depth_limit(),
        }
    }
}

/// Nodes created by one generator run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixtureSummary {
    pub directories: usize,
    pub files: usize,
}

pub struct FixtureGenerator {
    platform: Platform,
    config: FixtureConfig,
}

impl FixtureGenerator {
    pub fn new(platform: Platform, config: FixtureConfig) -> Self {
        Self { platform, config }
    }

    /// One name per embeddable invalid character, e.g. ` . : . 😇testdir2😠 . : . `.
    pub fn fixture_names(&self, base: &str) -> Vec<String> {
        self.platform
            .embeddable_chars()
            .into_iter()
            .enumerate()
            .map(|(n, c)| format!(" . {c} . 😇{base}{n}😠 . {c} . "))
            .collect()
    }

    /// Create `depth` levels of fixtures under `root`. Existing nodes are left alone.
    pub fn create(&self, root: &Path, depth: FixtureDepth) -> Result<FixtureSummary, RmcharsError> {
        let mut summary = FixtureSummary::default();
        let fan_out = self.fan_out(depth.get());
        self.create_level(root, depth.get(), fan_out, &mut summary)?;
        Ok(summary)
    }

    fn fan_out(&self, depth: u8) -> usize {
        match self.config.branching {
            Some(n) => n,
            None if depth <= self.config.wide_depth_limit => usize::MAX,
            None => 1,
        }
    }

    fn create_level(
        &self,
        dir: &Path,
        remaining: u8,
        fan_out: usize,
        summary: &mut FixtureSummary,
    ) -> Result<(), RmcharsError> {
        let dirs = self.make_nodes(dir, summary)?;
        if remaining <= 1 {
            return Ok(());
        }
        for sub in dirs.iter().take(fan_out) {
            self.create_level(sub, remaining - 1, fan_out, summary)?;
        }
        Ok(())
    }

    fn make_nodes(&self, dir: &Path, summary: &mut FixtureSummary) -> Result<Vec<PathBuf>, RmcharsError> {
        let mut dirs = Vec::new();
        for name in self.fixture_names("testdir") {
            let path = dir.join(name);
            if !path.exists() {
                fs::create_dir(&path)?;
                summary.directories += 1;
            }
            dirs.push(path);
        }
        for name in self.fixture_names("testfile") {
            let path = dir.join(name);
            if !path.exists() {
                fs::OpenOptions::new().create(true).append(true).open(&path)?;
                summary.files += 1;
            }
        }
        debug!(dir = %dir.display(), "Created fixture level");
        Ok(dirs)
    }
}
