//! CheckStyle XML report output.
//!
//! [`CheckstyleReporter`] is the lifecycle-bound sink for one linting run:
//! `initialize` once, `report` once per file, `finalize` once. The structured
//! document accumulates in an owned buffer and is flushed to the primary
//! writer as the final side effect of the run; fatal and internal notices go
//! to the operator writer immediately and never touch the buffer.
//!
//! Call ordering is the caller's obligation. The reporter does not track or
//! re-validate its own state: `initialize` after content was buffered simply
//! resets the buffer, and nothing prevents `report` after `finalize` from
//! writing into a buffer nobody will flush.

use std::io::{self, Write};

use crate::diagnostic::Diagnostic;
use crate::formatters::xml::XmlBuffer;

/// CheckStyle format version written in the report envelope.
pub const CHECKSTYLE_VERSION: &str = "4.3";

/// Reporter serializing diagnostics as CheckStyle XML.
///
/// Generic over the primary output writer `W` and the operator stream `O`
/// so tests can capture both.
#[derive(Debug)]
pub struct CheckstyleReporter<W: Write, O: Write> {
    xml: XmlBuffer,
    output: W,
    operator: O,
}

impl CheckstyleReporter<io::Stdout, io::Stderr> {
    /// Creates a reporter writing the report to stdout and operator
    /// notices to stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, O: Write> CheckstyleReporter<W, O> {
    /// Creates a reporter over the given writers.
    pub fn new(output: W, operator: O) -> Self {
        Self {
            xml: XmlBuffer::new(),
            output,
            operator,
        }
    }

    /// Opens the report envelope, discarding any previously buffered content.
    pub fn initialize(&mut self) {
        self.xml.clear();
        self.xml.declaration();
        self.xml
            .start_element("checkstyle", &[("version", CHECKSTYLE_VERSION)]);
    }

    /// Writes a fatal notice to the operator stream immediately.
    ///
    /// The structured report is not touched; the affected file's section
    /// is simply absent.
    pub fn report_fatal(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.operator, "[Fatal error] {message}")?;
        self.operator.flush()
    }

    /// Writes a warning notice to the operator stream immediately.
    pub fn report_internal(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.operator, "[Warning] {message}")?;
        self.operator.flush()
    }

    /// Appends one file's section to the report.
    ///
    /// Internal records are drained to the operator stream (message text
    /// verbatim, one per line, followed by one blank line if any were
    /// found) and excluded from the structured output. The remaining
    /// records are serialized in the order received.
    ///
    /// `source_code` and `fixes_applied` are part of the reporter calling
    /// convention but unused by this format.
    pub fn report(
        &mut self,
        filename: &str,
        source_code: &str,
        diagnostics: Vec<Diagnostic>,
        fixes_applied: bool,
    ) -> io::Result<()> {
        let _ = (source_code, fixes_applied);

        let (internal, findings): (Vec<Diagnostic>, Vec<Diagnostic>) =
            diagnostics.into_iter().partition(|d| d.internal);

        for record in &internal {
            writeln!(self.operator, "{}", record.message)?;
        }
        if !internal.is_empty() {
            writeln!(self.operator)?;
            self.operator.flush()?;
        }

        self.xml.start_element("file", &[("name", filename)]);
        for diag in &findings {
            let line = diag.line.to_string();
            let column = diag.column.to_string();
            let message = format!("{} ({})", diag.message, diag.rule_id);
            self.xml.empty_element(
                "error",
                &[
                    ("line", &line),
                    ("column", &column),
                    ("severity", diag.severity.as_str()),
                    ("message", &message),
                    ("source", &diag.rule_id),
                ],
            );
        }
        self.xml.end_element("file");
        Ok(())
    }

    /// Closes the report envelope and writes the whole buffer to the
    /// primary output, exactly once.
    pub fn finalize(&mut self) -> io::Result<()> {
        self.xml.end_element("checkstyle");
        self.output.write_all(self.xml.as_str().as_bytes())?;
        self.output.flush()
    }

    /// Consumes the reporter, returning the primary output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Consumes the reporter, returning the primary output and operator
    /// stream writers.
    pub fn into_streams(self) -> (W, O) {
        (self.output, self.operator)
    }
}
