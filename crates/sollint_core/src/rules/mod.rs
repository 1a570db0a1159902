//! Built-in lint rules.

mod long_lines;

pub use long_lines::LongLines;

use crate::rule::RuleBox;

/// Identifiers of all built-in rules.
pub const BUILTIN_RULE_IDS: &[&str] = &[long_lines::RULE_ID];

/// Returns fresh instances of all built-in rules, in registration order.
///
/// Registration order is the order rules run in; diagnostics are collected
/// per file in this order without reordering.
pub fn builtin_rules() -> Vec<RuleBox> {
    vec![Box::new(LongLines::new())]
}
