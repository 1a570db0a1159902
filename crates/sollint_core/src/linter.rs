//! The lint engine boundary.
//!
//! `Linter` owns the configured rules and drives one file at a time:
//! parse, build the lint context, run each rule, collect diagnostics in
//! emission order. `run`/`run_sources` additionally drive the reporter
//! lifecycle: initialize once, report once per file (fatal failures go to
//! the fatal channel instead), finalize once. Everything is synchronous
//! and caller-sequenced.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use sollint_ast::AstArena;
use sollint_parser::Parser;

use crate::config::LinterConfig;
use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::error::LinterError;
use crate::formatters::CheckstyleReporter;
use crate::result::{LintResult, LintSummary};
use crate::rule::RuleBox;
use crate::rules::{BUILTIN_RULE_IDS, builtin_rules};

/// Files larger than this are refused rather than linted.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

struct ConfiguredRule {
    rule: RuleBox,
    severity: Option<Severity>,
}

/// The lint engine for one configuration.
pub struct Linter<P: Parser> {
    parser: P,
    rules: Vec<ConfiguredRule>,
}

impl<P: Parser> std::fmt::Debug for Linter<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Linter")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl<P: Parser> Linter<P> {
    /// Creates a linter from a configuration and a parser.
    ///
    /// Fails with [`LinterError::Config`] on unknown rule identifiers,
    /// invalid severities, or settings a rule rejects.
    pub fn new(config: &LinterConfig, parser: P) -> Result<Self, LinterError> {
        for name in config.rules.keys() {
            if !BUILTIN_RULE_IDS.contains(&name.as_str()) {
                return Err(LinterError::config(format!("unknown rule: {name}")));
            }
        }

        let mut rules = Vec::new();
        for mut rule in builtin_rules() {
            let Some(option) = config.rules.get(rule.id()) else {
                continue;
            };
            if !option.is_enabled() {
                debug!("Rule '{}' is disabled", rule.id());
                continue;
            }
            rule.configure(&option.options())?;
            let severity = option.severity_override()?;
            rules.push(ConfiguredRule { rule, severity });
        }

        Ok(Self { parser, rules })
    }

    /// Returns the identifiers of the enabled rules, in execution order.
    pub fn enabled_rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.rule.id()).collect()
    }

    /// Lints in-memory source text.
    ///
    /// Diagnostics are collected in rule registration order and, within a
    /// rule, in the order the rule emitted them. No reordering happens
    /// here or later.
    pub fn lint_source(&self, path: &Path, content: &str) -> Result<LintResult, LinterError> {
        debug!("Linting {}", path.display());

        let arena = AstArena::new();
        let root = self
            .parser
            .parse(&arena, content)
            .map_err(|e| LinterError::parse(format!("{}: {e}", path.display())))?;
        let ctx = LintContext::new(content);

        let mut diagnostics = Vec::new();
        for configured in &self.rules {
            let mut emitted = configured.rule.check(&ctx, &root);
            if let Some(severity) = configured.severity {
                for diag in emitted.iter_mut().filter(|d| !d.internal) {
                    diag.severity = severity;
                }
            }
            diagnostics.extend(emitted);
        }

        Ok(LintResult::new(path.to_path_buf(), diagnostics))
    }

    /// Reads and lints a file from disk.
    pub fn lint_file(&self, path: &Path) -> Result<LintResult, LinterError> {
        let content = self.read_file(path)?;
        self.lint_source(path, &content)
    }

    /// Lints files from disk, driving the full reporter lifecycle.
    pub fn run<W: Write, O: Write>(
        &self,
        paths: &[PathBuf],
        reporter: &mut CheckstyleReporter<W, O>,
    ) -> Result<LintSummary, LinterError> {
        reporter.initialize();
        let mut summary = LintSummary::default();
        for path in paths {
            let filename = path.display().to_string();
            match self.read_file(path) {
                Ok(content) => {
                    self.report_one(&filename, &content, reporter, &mut summary)?;
                }
                Err(e) => {
                    warn!("Skipping {}: {e}", path.display());
                    summary.record_fatal();
                    reporter.report_fatal(&e.to_string())?;
                }
            }
        }
        reporter.finalize()?;
        Ok(summary)
    }

    /// Lints named in-memory sources, driving the full reporter lifecycle.
    pub fn run_sources<W: Write, O: Write>(
        &self,
        sources: &[(&str, &str)],
        reporter: &mut CheckstyleReporter<W, O>,
    ) -> Result<LintSummary, LinterError> {
        reporter.initialize();
        let mut summary = LintSummary::default();
        for (filename, content) in sources {
            self.report_one(filename, content, reporter, &mut summary)?;
        }
        reporter.finalize()?;
        Ok(summary)
    }

    fn report_one<W: Write, O: Write>(
        &self,
        filename: &str,
        content: &str,
        reporter: &mut CheckstyleReporter<W, O>,
        summary: &mut LintSummary,
    ) -> Result<(), LinterError> {
        match self.lint_source(Path::new(filename), content) {
            Ok(result) => {
                summary.record(&result);
                reporter.report(filename, content, result.diagnostics, false)?;
            }
            Err(e) => {
                warn!("Skipping {filename}: {e}");
                summary.record_fatal();
                reporter.report_fatal(&e.to_string())?;
            }
        }
        Ok(())
    }

    fn read_file(&self, path: &Path) -> Result<String, LinterError> {
        let metadata = fs::metadata(path).map_err(|e| {
            LinterError::file(format!(
                "Failed to read metadata for {}: {}",
                path.display(),
                e
            ))
        })?;

        if !metadata.is_file() {
            return Err(LinterError::file(format!(
                "Not a regular file: {}",
                path.display()
            )));
        }

        if metadata.len() > MAX_FILE_SIZE {
            return Err(LinterError::file(format!(
                "File size exceeds limit of {} bytes: {}",
                MAX_FILE_SIZE,
                path.display()
            )));
        }

        fs::read_to_string(path)
            .map_err(|e| LinterError::file(format!("Failed to read {}: {}", path.display(), e)))
    }
}
