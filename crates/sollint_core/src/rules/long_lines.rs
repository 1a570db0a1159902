//! long-lines rule: flag physical lines that exceed a maximum length.
//!
//! # Configuration
//!
//! | Option | Type | Default | Description |
//! |--------|------|---------|-------------|
//! | max | number | 79 | Maximum acceptable characters per physical line |
//!
//! A line of exactly `max` characters is acceptable; one more character is
//! a violation. A physical line yields at most one violation no matter how
//! many nodes span it: the finding is attributed to the outermost node
//! whose span starts on that line, first in preorder, and an explicit
//! per-line reported set suppresses every later candidate.

use std::collections::{HashMap, HashSet};
use std::ops::ControlFlow;

use serde::Deserialize;
use sollint_ast::{NodeKind, SolNode, walk_preorder};

use crate::LinterError;
use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, NodeRef};
use crate::rule::Rule;

/// Stable identifier of the long-lines rule.
pub const RULE_ID: &str = "long-lines";

const DEFAULT_MAX_LINE_LENGTH: usize = 79;

/// Settings for the long-lines rule.
#[derive(Debug, Deserialize)]
struct Options {
    /// Maximum acceptable characters per physical line.
    #[serde(default = "default_max")]
    max: usize,
}

fn default_max() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

/// The long-lines rule.
#[derive(Debug)]
pub struct LongLines {
    max: usize,
}

impl LongLines {
    /// Creates the rule with the default threshold.
    pub fn new() -> Self {
        Self {
            max: DEFAULT_MAX_LINE_LENGTH,
        }
    }

    /// Creates the rule with a specific threshold.
    pub fn with_max(max: usize) -> Self {
        Self { max }
    }
}

impl Default for LongLines {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for LongLines {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn configure(&mut self, options: &serde_json::Value) -> Result<(), LinterError> {
        if options.is_null() {
            return Ok(());
        }
        // A bare integer is accepted as shorthand for `{ "max": n }`.
        if let Some(max) = options.as_u64() {
            self.max = max as usize;
            return Ok(());
        }
        let parsed: Options = serde_json::from_value(options.clone())
            .map_err(|e| LinterError::config(format!("invalid `{RULE_ID}` settings: {e}")))?;
        self.max = parsed.max;
        Ok(())
    }

    fn check(&self, ctx: &LintContext<'_>, root: &SolNode<'_>) -> Vec<Diagnostic> {
        if root.span.end as usize > ctx.source().len() {
            // The tree does not describe this source; line measurements
            // would be meaningless.
            return vec![Diagnostic::internal(
                RULE_ID,
                format!("{RULE_ID}: syntax tree span exceeds the source; cannot measure lines"),
            )];
        }

        let over: Vec<u32> = (1..=ctx.line_count() as u32)
            .filter(|&line| {
                ctx.line_info(line)
                    .is_some_and(|info| info.chars as usize > self.max)
            })
            .collect();
        if over.is_empty() {
            return Vec::new();
        }

        let over_set: HashSet<u32> = over.iter().copied().collect();
        let mut reported: HashSet<u32> = HashSet::new();
        let mut attributed: HashMap<u32, (NodeRef, u32)> = HashMap::new();

        let _ = walk_preorder(root, &mut |node| {
            if node.kind == NodeKind::SourceUnit {
                return ControlFlow::Continue(());
            }
            if let Some(line) = ctx.byte_offset_to_line(node.span.start)
                && over_set.contains(&line)
                && !reported.contains(&line)
            {
                reported.insert(line);
                let column = ctx.byte_offset_to_column(node.span.start).unwrap_or(0);
                attributed.insert(line, (NodeRef::from(node), column));
                if reported.len() == over_set.len() {
                    return ControlFlow::Break(());
                }
            }
            ControlFlow::Continue(())
        });

        over.into_iter()
            .map(|line| {
                let (node, column) = attributed.get(&line).copied().unwrap_or_else(|| {
                    // No node starts on this line; fall back to the
                    // innermost node covering it.
                    let offset = ctx.line_info(line).map(|info| info.start).unwrap_or(0);
                    let node = innermost_covering(root, offset).unwrap_or(root);
                    (NodeRef::from(node), 0)
                });
                Diagnostic::new(
                    RULE_ID,
                    format!("line is longer than {} characters", self.max),
                    line,
                    column,
                )
                .with_node(node)
            })
            .collect()
    }
}

/// Returns the deepest node whose span contains `offset`.
fn innermost_covering<'n, 'a>(node: &'n SolNode<'a>, offset: u32) -> Option<&'n SolNode<'a>> {
    if !node.span.contains(offset) {
        return None;
    }
    for child in node.children {
        if let Some(inner) = innermost_covering(child, offset) {
            return Some(inner);
        }
    }
    Some(node)
}
