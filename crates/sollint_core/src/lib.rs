//! # sollint_core
//!
//! Core linter engine and diagnostic reporting for sollint.
//!
//! This crate provides:
//! - The `Diagnostic` contract shared by rules and reporters
//! - The `Rule` trait and built-in rules
//! - The `Linter` engine boundary
//! - CheckStyle XML report output
//!
//! ## Example
//!
//! ```rust
//! use sollint_core::{CheckstyleReporter, Linter, LinterConfig, RuleOption};
//! use sollint_parser::ContractParser;
//!
//! let config = LinterConfig::new().with_rule("long-lines", RuleOption::Enabled(true));
//! let linter = Linter::new(&config, ContractParser::new()).unwrap();
//!
//! let mut reporter = CheckstyleReporter::new(Vec::new(), Vec::new());
//! let summary = linter
//!     .run_sources(&[("Token.sol", "contract Token {}")], &mut reporter)
//!     .unwrap();
//! assert_eq!(summary.files_checked, 1);
//! ```

mod config;
pub mod context;
mod diagnostic;
mod error;
pub mod formatters;
mod linter;
mod result;
mod rule;
pub mod rules;

pub use config::{LinterConfig, RuleOption};
pub use context::{LineInfo, LintContext};
pub use diagnostic::{Diagnostic, NodeRef, Severity};
pub use error::LinterError;
pub use formatters::{CHECKSTYLE_VERSION, CheckstyleReporter};
pub use linter::{Linter, MAX_FILE_SIZE};
pub use result::{LintResult, LintSummary};
pub use rule::{Rule, RuleBox};
pub use rules::{BUILTIN_RULE_IDS, LongLines, builtin_rules};
