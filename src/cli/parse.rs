//! CLI parse: clap types for rmchars. Definitions and argument validation only.

use crate::action::Mode;
use crate::fixture::FixtureDepth;
use crate::sanitize::Platform;
use crate::tree::CollisionPolicy;
use clap::{ArgGroup, Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Remove invalid characters from a given path.
#[derive(Parser, Debug)]
#[command(name = "rmchars", version)]
#[command(about = "Remove invalid characters from a given path.")]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["interactive", "automate", "dry_run", "quiet", "create"])
))]
pub struct Cli {
    /// Prompt before renaming each path
    #[arg(short, long)]
    pub interactive: bool,

    /// Rename each path without prompting
    #[arg(short, long)]
    pub automate: bool,

    /// Perform a dry run to see what would be renamed
    #[arg(short = 't', long = "dry_run", visible_alias = "dry-run")]
    pub dry_run: bool,

    /// Run silently
    #[arg(short, long)]
    pub quiet: bool,

    /// Create test directories to a specified depth (1-15)
    #[arg(short, long, value_name = "DEPTH", value_parser = parse_depth)]
    pub create: Option<FixtureDepth>,

    /// A valid directory path
    #[arg(default_value = ".", value_parser = parse_dir)]
    pub path: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Platform whose naming rules apply (default: this system)
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,

    /// What to do when a sanitized name already exists or is empty
    #[arg(long = "on-collision", value_enum)]
    pub on_collision: Option<CollisionPolicy>,

    /// Print a summary after the walk
    #[arg(long, value_enum, default_value_t = SummaryFormat::None)]
    pub summary: SummaryFormat,

    /// Enable verbose logging on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

/// Summary printed once the walk finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    None,
    Text,
    Json,
}

/// What one invocation asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    Sanitize(Mode),
    Create(FixtureDepth),
}

impl Cli {
    pub fn invocation(&self) -> Invocation {
        if let Some(depth) = self.create {
            Invocation::Create(depth)
        } else if self.interactive {
            Invocation::Sanitize(Mode::Interactive)
        } else if self.automate {
            Invocation::Sanitize(Mode::Automate)
        } else if self.dry_run {
            Invocation::Sanitize(Mode::DryRun)
        } else {
            Invocation::Sanitize(Mode::Quiet)
        }
    }
}

/// Accept only existing directories.
fn parse_dir(s: &str) -> Result<PathBuf, String> {
    let path = Path::new(s);
    if !path.is_dir() {
        return Err(format!("{} is not a directory.", s));
    }
    Ok(path.to_path_buf())
}

fn parse_depth(s: &str) -> Result<FixtureDepth, String> {
    s.parse::<FixtureDepth>().map_err(|e| match e {
        crate::error::RmcharsError::Usage(msg) => msg,
        other => other.to_string(),
    })
}
