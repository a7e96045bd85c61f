//! Line/column positions for diagnostics
//!
//! Lowering errors report where in the template the offending node starts.
//! Rowan only knows byte offsets, so offsets are converted here.

use std::fmt;

use text_size::{TextRange, TextSize};

/// A position in source code (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Maps byte offsets to line/column positions.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Offset of the first byte of every line
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        line_starts.extend(
            text.match_indices('\n')
                .map(|(offset, _)| TextSize::new(offset as u32 + 1)),
        );
        Self { line_starts }
    }

    /// Column is counted in bytes from the line start.
    pub fn position(&self, offset: TextSize) -> Position {
        let line = self
            .line_starts
            .partition_point(|start| *start <= offset)
            .saturating_sub(1);
        let column = offset - self.line_starts[line];
        Position::new(line, u32::from(column) as usize)
    }
}

/// Approximate location of a node in template source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub range: TextRange,
    pub start: Position,
}

impl SourceLocation {
    pub fn new(range: TextRange, start: Position) -> Self {
        Self { range, start }
    }
}

impl fmt::Display for SourceLocation {
    /// Rendered 1-indexed, as editors show it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start.line + 1, self.start.column + 1)
    }
}
