//! Diff generation for previewing port rewrites.

use similar::{ChangeTag, TextDiff};
use std::path::Path;

/// Generates a unified diff between two versions of a test plan.
pub fn unified_diff(original: &str, modified: &str, path: &Path) -> String {
    let diff = TextDiff::from_lines(original, modified);
    let mut output = format!("--- a/{0}\n+++ b/{0}\n", path.display());

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            output.push('\n');
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };
                output.push(sign);
                output.push_str(change.value());
                if change.missing_newline() {
                    output.push('\n');
                }
            }
        }
    }

    output
}

/// Counts of changed files and lines across a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiffSummary {
    pub files_changed: usize,
    pub lines_changed: usize,
}

impl DiffSummary {
    /// Creates a summary from original and modified content.
    ///
    /// Port rewrites never add or remove lines, so only deletions are
    /// counted as changed lines.
    pub fn from_diff(original: &str, modified: &str) -> Self {
        let lines_changed = TextDiff::from_lines(original, modified)
            .iter_all_changes()
            .filter(|change| change.tag() == ChangeTag::Delete)
            .count();

        Self {
            files_changed: usize::from(lines_changed > 0),
            lines_changed,
        }
    }

    /// Combines two summaries.
    pub fn merge(&mut self, other: &DiffSummary) {
        self.files_changed += other.files_changed;
        self.lines_changed += other.lines_changed;
    }
}

impl std::fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} file(s) changed, {} port line(s) rewritten",
            self.files_changed, self.lines_changed
        )
    }
}
