//! Diagnostic types for lint results.

use serde::{Deserialize, Serialize};
use sollint_ast::{NodeKind, SolNode, Span};

/// Severity level for diagnostics.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - must be fixed.
    Error,
    /// Warning - should be reviewed.
    #[default]
    Warning,
    /// Info - informational message.
    Info,
}

impl Severity {
    /// Returns the lowercase name used in reports.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// Reference to the syntax tree node a diagnostic is attributed to.
///
/// Diagnostics outlive the arena the tree was allocated in, so they carry
/// the attributed node's kind and span rather than a borrow of the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef {
    /// Kind of the attributed node.
    pub kind: NodeKind,
    /// Byte span of the attributed node.
    pub span: Span,
}

impl From<&SolNode<'_>> for NodeRef {
    fn from(node: &SolNode<'_>) -> Self {
        Self {
            kind: node.kind,
            span: node.span,
        }
    }
}

/// A diagnostic message from a lint rule.
///
/// Normal records describe a finding in the analyzed source and end up in
/// the structured report. Records with `internal` set describe a failure of
/// the tool itself; the reporter drains them to the operator stream and
/// they never reach the structured report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The rule that generated this diagnostic.
    pub rule_id: String,

    /// The diagnostic message.
    pub message: String,

    /// Physical source line (1-indexed; 0 for internal records).
    pub line: u32,

    /// Column offset within the line (0-indexed).
    pub column: u32,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,

    /// The syntactic construct the finding is attributed to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeRef>,

    /// True if the record reports a tool-internal failure rather than a
    /// defect in the analyzed source.
    #[serde(default)]
    pub internal: bool,
}

impl Diagnostic {
    /// Creates a new lint diagnostic.
    pub fn new(
        rule_id: impl Into<String>,
        message: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            line,
            column,
            severity: Severity::Warning,
            node: None,
            internal: false,
        }
    }

    /// Creates a tool-internal diagnostic.
    ///
    /// Internal records carry no source position; the reporter only
    /// surfaces their message.
    pub fn internal(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            line: 0,
            column: 0,
            severity: Severity::Warning,
            node: None,
            internal: true,
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the attributed node.
    pub fn with_node(mut self, node: NodeRef) -> Self {
        self.node = Some(node);
        self
    }
}
