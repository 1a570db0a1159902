//! Lint result types.

use std::path::PathBuf;

use crate::diagnostic::Diagnostic;

/// Result of linting a single file.
#[derive(Debug)]
pub struct LintResult {
    /// Path to the linted file.
    pub path: PathBuf,

    /// Diagnostics found in the file, in emission order.
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    /// Creates a new lint result.
    pub fn new(path: PathBuf, diagnostics: Vec<Diagnostic>) -> Self {
        Self { path, diagnostics }
    }

    /// Returns true if any finding (non-internal diagnostic) was produced.
    pub fn has_findings(&self) -> bool {
        self.diagnostics.iter().any(|d| !d.internal)
    }

    /// Returns the number of diagnostics.
    pub fn diagnostic_count(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Summary of linting multiple files.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LintSummary {
    /// Total files processed, including ones that failed fatally.
    pub files_checked: usize,

    /// Total diagnostics found.
    pub total_diagnostics: usize,

    /// Files with at least one finding.
    pub files_with_findings: usize,

    /// Files that could not be linted (read or parse failure).
    pub fatal_errors: usize,
}

impl LintSummary {
    /// Folds one file's result into the summary.
    pub fn record(&mut self, result: &LintResult) {
        self.files_checked += 1;
        self.total_diagnostics += result.diagnostics.len();
        if result.has_findings() {
            self.files_with_findings += 1;
        }
    }

    /// Folds one fatal failure into the summary.
    pub fn record_fatal(&mut self) {
        self.files_checked += 1;
        self.fatal_errors += 1;
    }
}
