//! Rewrite driver: discovers test plans, rewrites them in place and reports.

use crate::config::PortConfig;
use crate::diff::{DiffSummary, unified_diff};
use crate::error::{FixPortsError, Result};
use crate::matcher::FileMatcher;
use crate::transform::{FileChange, PortRewriter, Transform};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// The result of a rewrite run.
#[derive(Debug, Default)]
pub struct FixReport {
    pub changes: Vec<FileChange>,
    pub summary: DiffSummary,
}

impl FixReport {
    /// Returns the number of files whose content changed.
    pub fn files_modified(&self) -> usize {
        self.changes.iter().filter(|c| c.is_modified()).count()
    }

    /// Returns the number of port lines that could not be tied to a path.
    pub fn warning_count(&self) -> usize {
        self.changes.iter().map(|c| c.warnings.len()).sum()
    }

    /// Generates a unified diff of all changes.
    pub fn diff(&self) -> String {
        self.changes
            .iter()
            .filter(|c| c.is_modified())
            .map(|c| unified_diff(&c.original, &c.transformed, &c.path))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Builder for a port rewrite run.
///
/// ```rust,no_run
/// use jmx_ports::prelude::*;
///
/// let report = PortFixer::in_dir("./performance")
///     .dry_run()
///     .apply()?;
///
/// println!("{}", report.diff());
/// # Ok::<(), jmx_ports::error::FixPortsError>(())
/// ```
pub struct PortFixer {
    root: PathBuf,
    config: PortConfig,
    files: Option<Vec<PathBuf>>,
    transform: Option<Box<dyn Transform>>,
    dry_run: bool,
}

impl PortFixer {
    /// Creates a run rooted at the given directory.
    pub fn in_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            root: path.into(),
            config: PortConfig::default(),
            files: None,
            transform: None,
            dry_run: false,
        }
    }

    /// Creates a run rooted at the current directory.
    pub fn current_dir() -> Result<Self> {
        Ok(Self::in_dir(std::env::current_dir()?))
    }

    /// Replaces the configuration.
    pub fn config(mut self, config: PortConfig) -> Self {
        self.config = config;
        self
    }

    /// Processes exactly these files, in order, instead of discovering them.
    ///
    /// Relative paths are resolved against the root.
    pub fn files(mut self, paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.files = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    /// Uses a custom transformation instead of the configured [`PortRewriter`].
    pub fn transform<T: Transform + 'static>(mut self, transform: T) -> Self {
        self.transform = Some(Box::new(transform));
        self
    }

    /// Enables dry-run mode (compute changes without writing).
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Returns the files this run would process, in processing order.
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        match &self.files {
            Some(files) => Ok(files.iter().map(|f| self.root.join(f)).collect()),
            None => FileMatcher::new()
                .include(self.config.pattern.as_str())
                .collect(&self.root),
        }
    }

    /// Applies the rewrite without producing any per-file output.
    pub fn apply(self) -> Result<FixReport> {
        self.run(&mut io::sink())
    }

    /// Runs in dry-run mode and returns the diff.
    pub fn preview(self) -> Result<String> {
        Ok(self.dry_run().apply()?.diff())
    }

    /// Applies the rewrite, writing warnings and confirmations to `out`.
    ///
    /// Files are handled one at a time; the first read or write failure
    /// stops the run and later files are left alone.
    pub fn run<W: Write>(mut self, out: &mut W) -> Result<FixReport> {
        let files = self.collect_files()?;
        let transform: Box<dyn Transform> = match self.transform.take() {
            Some(transform) => transform,
            None => Box::new(PortRewriter::new(&self.config)?),
        };

        tracing::debug!(
            root = %self.root.display(),
            files = files.len(),
            transform = %transform.describe(),
            dry_run = self.dry_run,
            "starting port rewrite"
        );

        let mut report = FixReport::default();

        for path in files {
            let original = fs::read_to_string(&path).map_err(|source| FixPortsError::ReadFile {
                path: path.clone(),
                source,
            })?;
            let output = transform.apply(&original, &path)?;

            for warning in &output.warnings {
                tracing::debug!(path = %path.display(), line = warning.line, "port without path");
                writeln!(out, "Warning: {warning}")?;
            }

            let change = FileChange {
                path,
                original,
                transformed: output.content,
                warnings: output.warnings,
            };

            report
                .summary
                .merge(&DiffSummary::from_diff(&change.original, &change.transformed));

            if !self.dry_run {
                change.apply()?;
                writeln!(out, "✓ Updated {}", display_name(&self.root, &change.path).display())?;
            }

            report.changes.push(change);
        }

        tracing::debug!(summary = %report.summary, "port rewrite finished");
        Ok(report)
    }
}

/// Path shown to the user: relative to the root when it lies below it.
fn display_name<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
