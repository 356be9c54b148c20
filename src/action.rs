//! Rename actions
//!
//! The rewrite driver only decides *that* a node should be renamed. How it
//! happens is up to the [`RenameAction`] chosen by the caller: rename and
//! report, ask first, report only, or rename silently.

mod confirm;

pub use confirm::{Confirm, TerminalConfirm};

use crate::error::RmcharsError;
use crate::report::{Outcome, SkipReason};
use crate::sanitize::PathPair;
use std::fs;
use std::io::Write;
use tracing::info;

/// Strategy applied to every invalid node.
pub trait RenameAction {
    fn apply(&mut self, pair: &PathPair) -> Result<Outcome, RmcharsError>;

    /// Whether [`apply`](Self::apply) changes the filesystem.
    fn mutates(&self) -> bool {
        true
    }

    /// Called instead of `apply` for a rename the `fail` collision policy
    /// would abort on. Only non-mutating actions see this.
    fn conflict(&mut self, _pair: &PathPair, _reason: SkipReason) -> Result<(), RmcharsError> {
        Ok(())
    }
}

/// Sanitizing mode selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Automate,
    DryRun,
    Quiet,
}

/// Rename `pair.old` to `pair.new` on disk.
pub fn rename_path(pair: &PathPair) -> Result<(), RmcharsError> {
    fs::rename(&pair.old, &pair.new).map_err(|source| RmcharsError::Rename {
        from: pair.old.clone(),
        to: pair.new.clone(),
        source,
    })?;
    info!(from = %pair.old.display(), to = %pair.new.display(), "Renamed");
    Ok(())
}

/// Print a line per rename, then rename.
pub struct Automate<W: Write> {
    out: W,
}

impl<W: Write> Automate<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenameAction for Automate<W> {
    fn apply(&mut self, pair: &PathPair) -> Result<Outcome, RmcharsError> {
        writeln!(
            self.out,
            "RENAMING: {} to {}",
            pair.old.display(),
            pair.new.display()
        )?;
        rename_path(pair)?;
        Ok(Outcome::Renamed)
    }
}

/// Ask before every rename; confirmed renames behave like [`Automate`].
pub struct Interactive<C: Confirm, W: Write> {
    confirm: C,
    inner: Automate<W>,
}

impl<C: Confirm, W: Write> Interactive<C, W> {
    pub fn new(confirm: C, out: W) -> Self {
        Self {
            confirm,
            inner: Automate::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }
}

impl<C: Confirm, W: Write> RenameAction for Interactive<C, W> {
    fn apply(&mut self, pair: &PathPair) -> Result<Outcome, RmcharsError> {
        let question = format!(
            "Would you like to rename {} to {} ?",
            pair.old.display(),
            pair.new.display()
        );
        if self.confirm.confirm(&question)? {
            self.inner.apply(pair)
        } else {
            Ok(Outcome::Declined)
        }
    }
}

/// Report what would be renamed without touching the filesystem.
pub struct DryRun<W: Write> {
    out: W,
}

impl<W: Write> DryRun<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenameAction for DryRun<W> {
    fn apply(&mut self, pair: &PathPair) -> Result<Outcome, RmcharsError> {
        writeln!(
            self.out,
            "TESTING: {} to {}",
            pair.old.display(),
            pair.new.display()
        )?;
        Ok(Outcome::WouldRename)
    }

    fn mutates(&self) -> bool {
        false
    }

    fn conflict(&mut self, pair: &PathPair, reason: SkipReason) -> Result<(), RmcharsError> {
        writeln!(
            self.out,
            "TESTING: {} to {} (would fail: {})",
            pair.old.display(),
            pair.new.display(),
            reason.describe()
        )?;
        Ok(())
    }
}

/// Rename without printing anything.
pub struct Quiet;

impl RenameAction for Quiet {
    fn apply(&mut self, pair: &PathPair) -> Result<Outcome, RmcharsError> {
        rename_path(pair)?;
        Ok(Outcome::Renamed)
    }
}
