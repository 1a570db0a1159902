//! Lint context: pre-computed line table for a source file.
//!
//! Rules that reason about physical lines (lengths, offsets-to-lines)
//! query this instead of re-scanning the source.

/// Pre-computed metadata for a single physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo {
    /// Byte offset of line start (inclusive).
    pub start: u32,
    /// Byte offset of end of line content, excluding the line terminator.
    pub end: u32,
    /// Character count of the line content, excluding the terminator.
    pub chars: u32,
    /// Whether this line contains only whitespace.
    pub is_blank: bool,
}

impl LineInfo {
    /// Creates a new LineInfo from a line's content.
    pub fn from_line(start: u32, line_text: &str) -> Self {
        Self {
            start,
            end: start + line_text.len() as u32,
            chars: line_text.chars().count() as u32,
            is_blank: line_text.trim().is_empty(),
        }
    }
}

/// Context for linting a single file.
///
/// Owns the line table; borrows the source for the duration of the lint.
pub struct LintContext<'a> {
    /// The source text.
    source: &'a str,
    /// Pre-computed line information.
    lines: Vec<LineInfo>,
}

impl<'a> LintContext<'a> {
    /// Creates a new LintContext from source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            lines: Self::compute_lines(source),
        }
    }

    /// Computes line information from source text.
    ///
    /// `\r\n` terminators are handled; a trailing newline yields a final
    /// empty line, matching editor line numbering.
    fn compute_lines(source: &str) -> Vec<LineInfo> {
        let mut lines = Vec::new();
        let mut offset = 0u32;

        for line in source.lines() {
            let info = LineInfo::from_line(offset, line);
            lines.push(info);
            offset = info.end;
            if (offset as usize) < source.len() {
                let remaining = &source.as_bytes()[offset as usize..];
                if remaining.starts_with(b"\r\n") {
                    offset += 2;
                } else {
                    offset += 1;
                }
            }
        }

        if source.ends_with('\n') {
            lines.push(LineInfo {
                start: source.len() as u32,
                end: source.len() as u32,
                chars: 0,
                is_blank: true,
            });
        }

        lines
    }

    /// Returns the source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns line information for the given line number (1-indexed).
    pub fn line_info(&self, line: u32) -> Option<&LineInfo> {
        if line == 0 {
            return None;
        }
        self.lines.get(line as usize - 1)
    }

    /// Returns the text of a specific line (1-indexed), terminator excluded.
    pub fn line_text(&self, line: u32) -> Option<&'a str> {
        let info = self.line_info(line)?;
        self.source.get(info.start as usize..info.end as usize)
    }

    /// Converts a byte offset to a 1-indexed line number.
    ///
    /// Uses binary search for O(log n) lookup.
    pub fn byte_offset_to_line(&self, offset: u32) -> Option<u32> {
        if self.lines.is_empty() {
            return None;
        }

        let idx = self.lines.partition_point(|info| info.start <= offset);
        if idx == 0 {
            return None;
        }

        let line_idx = idx - 1;
        let info = &self.lines[line_idx];

        let in_line = offset <= info.end
            || (line_idx + 1 < self.lines.len() && offset < self.lines[line_idx + 1].start)
            || (line_idx + 1 == self.lines.len() && offset <= self.source.len() as u32);

        if in_line { Some((line_idx + 1) as u32) } else { None }
    }

    /// Converts a byte offset to a 0-indexed character column on its line.
    ///
    /// Returns `None` if the offset is outside the source or not on a
    /// character boundary.
    pub fn byte_offset_to_column(&self, offset: u32) -> Option<u32> {
        let line = self.byte_offset_to_line(offset)?;
        let info = self.line_info(line)?;
        let text = self.line_text(line)?;
        let rel = (offset - info.start) as usize;
        if rel >= text.len() {
            return Some(info.chars);
        }
        let prefix = text.get(..rel)?;
        Some(prefix.chars().count() as u32)
    }
}
