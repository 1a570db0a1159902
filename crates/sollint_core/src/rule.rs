//! Rule trait for defining lint rules.

use sollint_ast::SolNode;

use crate::LinterError;
use crate::context::LintContext;
use crate::diagnostic::Diagnostic;

/// A lint rule over one file's source text and syntax tree.
///
/// Rules are pure with respect to the reporter: they only read the context
/// and the tree and return diagnostics. Tool-internal failures are returned
/// as diagnostics with the `internal` flag set, never panicked on.
///
/// # Example
///
/// ```ignore
/// use sollint_core::{Diagnostic, LintContext, LinterError, Rule};
/// use sollint_ast::SolNode;
///
/// pub struct NoEmptyContracts;
///
/// impl Rule for NoEmptyContracts {
///     fn id(&self) -> &'static str {
///         "no-empty-contracts"
///     }
///
///     fn check(&self, ctx: &LintContext<'_>, root: &SolNode<'_>) -> Vec<Diagnostic> {
///         // walk the tree, collect findings
///         Vec::new()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the stable identifier of this rule.
    fn id(&self) -> &'static str;

    /// Applies configured settings.
    ///
    /// `options` is the settings value from the configuration map; rules
    /// deserialize what they understand and reject the rest. The default
    /// implementation accepts only the absence of settings.
    fn configure(&mut self, options: &serde_json::Value) -> Result<(), LinterError> {
        if options.is_null() {
            Ok(())
        } else {
            Err(LinterError::config(format!(
                "rule `{}` takes no settings",
                self.id()
            )))
        }
    }

    /// Checks a single file and returns the diagnostics found.
    fn check(&self, ctx: &LintContext<'_>, root: &SolNode<'_>) -> Vec<Diagnostic>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
