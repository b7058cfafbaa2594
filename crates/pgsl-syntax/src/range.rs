//! Byte ranges into preprocessed source text.

use core::fmt;

/// Half-open byte range `start..end` into the preprocessed source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourceRange {
    pub start: usize,
    pub end: usize,
}

impl SourceRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Smallest range covering both `self` and `other`.
    pub fn join(self, other: SourceRange) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slice `source` with this range, clamped to the text bounds.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        let end = self.end.min(source.len());
        let start = self.start.min(end);
        source.get(start..end).unwrap_or("")
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// One-based line and column of a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl LineColumn {
    pub fn of(source: &str, offset: usize) -> Self {
        let mut line = 1;
        let mut column = 1;
        for (index, c) in source.char_indices() {
            if index >= offset {
                break;
            }
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self { line, column }
    }
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn test_join() {
        let joined = SourceRange::new(4, 8).join(SourceRange::new(2, 6));
        assert_eq!(joined, SourceRange::new(2, 8));
        assert_eq!(joined.len(), 6);
    }

    #[test]
    fn test_slice_clamps() {
        let source = "const a";
        assert_eq!(SourceRange::new(6, 7).slice(source), "a");
        assert_eq!(SourceRange::new(6, 40).slice(source), "a");
        assert_eq!(SourceRange::new(40, 50).slice(source), "");
    }

    #[test]
    fn test_line_column() {
        let source = "a\nbc\nd";
        assert_eq!(LineColumn::of(source, 0), LineColumn { line: 1, column: 1 });
        assert_eq!(LineColumn::of(source, 3), LineColumn { line: 2, column: 2 });
        assert_eq!(format!("{}", LineColumn::of(source, 5)), "3:1");
    }
}
