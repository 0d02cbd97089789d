//! Test-plan discovery by glob pattern.

use crate::error::Result;
use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Matches paths below a root directory against glob patterns.
///
/// Globs follow shell rules: `*` stays within one path component and does
/// not match names starting with a dot, while `**` crosses directories.
/// Like a shell, any path the glob names is returned, whatever its type: a
/// directory or a dangling symlink called `plan.jmx` is handed to the caller,
/// which then fails to read it.
#[derive(Default, Clone)]
pub struct FileMatcher {
    include_globs: Vec<String>,
}

impl FileMatcher {
    /// Creates a new file matcher that matches nothing until a glob is added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Includes paths matching the glob pattern, relative to the root.
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include_globs.push(pattern.into());
        self
    }

    /// Collects all matching paths from the given root directory.
    ///
    /// Paths come back in directory-listing order. A root that does not
    /// exist yields nothing.
    pub fn collect(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if self.include_globs.is_empty() {
            return Ok(Vec::new());
        }

        let include_set = build_glob_set(&self.include_globs)?;

        let mut walker = WalkDir::new(root).follow_links(true);
        if let Some(depth) = self.max_depth() {
            walker = walker.max_depth(depth);
        }

        let mut matched = Vec::new();

        for entry in walker
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        {
            // Dangling links surface as errors carrying their path.
            let (path, depth) = match &entry {
                Ok(e) => (e.path(), e.depth()),
                Err(err) => match err.path() {
                    Some(path) if !has_hidden_name(path) => (path, err.depth()),
                    _ => continue,
                },
            };

            if depth == 0 {
                continue;
            }

            let rel_path = path.strip_prefix(root).unwrap_or(path);
            if include_set.is_match(rel_path) {
                matched.push(path.to_path_buf());
            }
        }

        tracing::debug!(root = %root.display(), count = matched.len(), "collected files");
        Ok(matched)
    }

    /// Deepest level any include glob can reach, if none of them recurse.
    fn max_depth(&self) -> Option<usize> {
        self.include_globs
            .iter()
            .map(|pattern| {
                if pattern.contains("**") {
                    None
                } else {
                    Some(
                        Path::new(pattern)
                            .components()
                            .filter(|c| matches!(c, Component::Normal(_)))
                            .count(),
                    )
                }
            })
            .try_fold(0, |max, depth| depth.map(|d| max.max(d)))
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    has_hidden_name(entry.path())
}

fn has_hidden_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(build_glob(pattern)?);
    }
    Ok(builder.build()?)
}

fn build_glob(pattern: &str) -> Result<Glob> {
    let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
    Ok(GlobBuilder::new(pattern).literal_separator(true).build()?)
}
