//! Source location spans for mapping syntax nodes back to script text

/// A span of script text
///
/// A span is a pair of source locations, the start (inclusive) and the end
/// (exclusive) of a syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: SourceLocation,
    end: SourceLocation,
}

impl Span {
    /// Creates a new span from a start and end source location
    ///
    /// # Panics
    ///
    /// Panics if `end` comes before `start`.
    #[must_use]
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        assert!(
            start.offset <= end.offset,
            "start offset must not be after end offset"
        );

        assert!(
            start.line < end.line || (start.line == end.line && start.column <= end.column),
            "start line and column must not be after end line and column"
        );

        Self { start, end }
    }

    /// Creates an empty span at the beginning of the script
    ///
    /// Used for synthesized nodes that have no text of their own.
    #[must_use]
    pub const fn empty() -> Self {
        let location = SourceLocation {
            offset: 0,
            line: 1,
            column: 1,
        };
        Self {
            start: location,
            end: location,
        }
    }

    /// Returns the start source location
    #[must_use]
    pub const fn start(&self) -> &SourceLocation {
        &self.start
    }

    /// Returns the end source location
    #[must_use]
    pub const fn end(&self) -> &SourceLocation {
        &self.end
    }

    /// Returns the length of the span in bytes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    /// Returns whether the span covers no text
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a span that covers both `self` and `other`
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let start = if self.start.offset <= other.start.offset {
            self.start
        } else {
            other.start
        };
        let end = if self.end.offset >= other.end.offset {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }

    /// Creates a span with arbitrary but well-formed locations
    ///
    /// Tests use this to build syntax nodes without caring about where they
    /// came from.
    #[cfg(feature = "random_span")]
    #[must_use]
    pub fn random_span() -> Self {
        use rand::Rng;

        let mut rng = rand::rng();
        let line = rng.random_range(1..1000);
        let column = rng.random_range(1..120);
        let offset = rng.random_range(0..100_000);
        let length = rng.random_range(0..40);

        let start = SourceLocation {
            offset,
            line,
            column,
        };
        let end = SourceLocation {
            offset: offset + length,
            line,
            column: column + length,
        };
        Self::new(start, end)
    }
}

/// A position in the script text
///
/// The offset is assumed to agree with the line and column. Code that
/// renders a location for display relies on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// The byte offset from the beginning of the script (0-indexed)
    pub offset: usize,
    /// The line number (1-indexed)
    pub line: usize,
    /// The column number (1-indexed)
    pub column: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(offset: usize, line: usize, column: usize) -> SourceLocation {
        SourceLocation {
            offset,
            line,
            column,
        }
    }

    #[test]
    fn merge_covers_both_spans() {
        let first = Span::new(location(4, 1, 5), location(8, 1, 9));
        let second = Span::new(location(12, 2, 3), location(20, 2, 11));

        let merged = first.merge(&second);

        assert_eq!(merged.start(), &location(4, 1, 5));
        assert_eq!(merged.end(), &location(20, 2, 11));
        assert_eq!(merged.len(), 16);
        assert_eq!(second.merge(&first), merged);
    }

    #[test]
    fn empty_span_has_no_length() {
        let span = Span::empty();
        assert!(span.is_empty());
        assert_eq!(span.start().line, 1);
    }

    #[test]
    #[should_panic(expected = "start offset must not be after end offset")]
    fn reversed_span_is_rejected() {
        let _ = Span::new(location(10, 1, 11), location(2, 1, 3));
    }
}
