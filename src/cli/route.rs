//! CLI route: run context and dispatch to the rewriter or the fixture generator.

use crate::action::{Automate, Confirm, DryRun, Interactive, Mode, Quiet, TerminalConfirm};
use crate::cli::parse::{Cli, Invocation, SummaryFormat};
use crate::cli::presentation::{format_fixture_summary, format_report_json, format_report_text};
use crate::config::{ConfigLoader, RmcharsConfig};
use crate::error::RmcharsError;
use crate::fixture::{FixtureDepth, FixtureGenerator};
use crate::tree::Rewriter;
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Runtime context for CLI execution: absolute root and resolved configuration.
pub struct RunContext {
    root: PathBuf,
    config: RmcharsConfig,
}

impl RunContext {
    /// Create run context from a root directory and optional config path.
    pub fn new(root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, RmcharsError> {
        let root = absolute_dir(&root)?;
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&root)?,
        };
        Self::with_config(root, config)
    }

    /// Context with an already-built configuration.
    pub fn with_config(root: PathBuf, config: RmcharsConfig) -> Result<Self, RmcharsError> {
        config.ensure_valid()?;
        Ok(Self {
            root: absolute_dir(&root)?,
            config,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &RmcharsConfig {
        &self.config
    }

    /// Fold command-line overrides into the loaded configuration.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(platform) = cli.platform {
            self.config.classifier.platform = Some(platform);
        }
        if let Some(policy) = cli.on_collision {
            self.config.collision = policy;
        }
    }

    /// Execute against stdout, prompting on the terminal in interactive mode.
    ///
    /// The text summary is colored only when stdout is a terminal.
    pub fn execute(&self, invocation: Invocation, summary: SummaryFormat) -> Result<String, RmcharsError> {
        let stdout = std::io::stdout();
        let color = stdout.is_terminal();
        let mut out = stdout.lock();
        self.dispatch(invocation, summary, &mut out, TerminalConfirm, color)
    }

    /// Execute with an explicit output sink and confirmation source.
    ///
    /// Per-node lines go to `out` as they happen; the returned string is the
    /// final summary (empty unless one was requested or fixtures were created).
    /// Summaries are never colored here.
    pub fn execute_with<C: Confirm>(
        &self,
        invocation: Invocation,
        summary: SummaryFormat,
        out: &mut dyn Write,
        confirm: C,
    ) -> Result<String, RmcharsError> {
        self.dispatch(invocation, summary, out, confirm, false)
    }

    fn dispatch<C: Confirm>(
        &self,
        invocation: Invocation,
        summary: SummaryFormat,
        out: &mut dyn Write,
        confirm: C,
        color: bool,
    ) -> Result<String, RmcharsError> {
        match invocation {
            Invocation::Create(depth) => self.handle_create(depth),
            Invocation::Sanitize(mode) => self.handle_sanitize(mode, summary, out, confirm, color),
        }
    }

    fn handle_create(&self, depth: FixtureDepth) -> Result<String, RmcharsError> {
        info!(root = %self.root.display(), depth = depth.get(), "Creating fixtures");
        let generator =
            FixtureGenerator::new(self.config.classifier.platform(), self.config.fixtures.clone());
        let summary = generator.create(&self.root, depth)?;
        Ok(format_fixture_summary(&self.root, &summary))
    }

    fn handle_sanitize<C: Confirm>(
        &self,
        mode: Mode,
        summary: SummaryFormat,
        out: &mut dyn Write,
        confirm: C,
        color: bool,
    ) -> Result<String, RmcharsError> {
        let classifier = self.config.classifier.build()?;
        let rewriter = Rewriter::new(classifier, self.config.collision)
            .with_walker_config(self.config.walker.clone());

        let report = match mode {
            Mode::Interactive => rewriter.run(&self.root, &mut Interactive::new(confirm, &mut *out)),
            Mode::Automate => rewriter.run(&self.root, &mut Automate::new(&mut *out)),
            Mode::DryRun => rewriter.run(&self.root, &mut DryRun::new(&mut *out)),
            Mode::Quiet => rewriter.run(&self.root, &mut Quiet),
        };
        out.flush()?;
        let report = report?;

        match summary {
            SummaryFormat::None => Ok(String::new()),
            SummaryFormat::Text => Ok(format_report_text(&report, color)),
            SummaryFormat::Json => format_report_json(&report),
        }
    }
}

fn absolute_dir(path: &Path) -> Result<PathBuf, RmcharsError> {
    if !path.is_dir() {
        return Err(RmcharsError::Usage(format!(
            "{} is not a directory.",
            path.display()
        )));
    }
    Ok(dunce::canonicalize(path)?)
}
