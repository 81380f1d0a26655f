use crate::span::Span;

/// A resolved position in the script text, ready for display.
///
/// Line and column numbers are 1-indexed. Tabs count as four columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocation {
    offset: usize,
    line: usize,
    column: usize,
    length: usize,
    line_source: String,
}

impl ErrorLocation {
    /// Computes the display location of `span` within `source`.
    ///
    /// Multi-line spans are clipped to the end of their first line, since
    /// diagnostics only underline a single line.
    ///
    /// # Panics
    ///
    /// Panics if the span starts beyond the end of `source`.
    #[must_use]
    pub fn from_source_and_span(source: &str, span: &Span) -> Self {
        let offset = span.start().offset;
        assert!(
            offset <= source.len(),
            "span offset ({offset}) is beyond the end of the source ({})",
            source.len()
        );

        let line_start = source[..offset]
            .rfind('\n')
            .map_or(0, |newline_idx| newline_idx + 1);
        let line_end = source[offset..]
            .find('\n')
            .map_or(source.len(), |newline_idx| offset + newline_idx);

        let num_tabs = source[line_start..offset]
            .chars()
            .filter(|c| *c == '\t')
            .count();
        let column = offset - line_start + 1 + num_tabs * 3;
        let line = source[..offset].matches('\n').count() + 1;

        let length = span.len().min(line_end - offset).max(1);
        let line_source = source[line_start..line_end].replace('\t', "    ");

        Self {
            offset,
            line,
            column,
            length,
            line_source,
        }
    }

    /// Returns the byte offset from the beginning of the source
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the line number (1-indexed)
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the column number (1-indexed)
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the number of characters to underline, at least one
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns the text of the line the location is on
    #[must_use]
    pub fn line_source(&self) -> &str {
        &self.line_source
    }
}
