/// Position tracking for compiler diagnostics
///
/// Stores the line/character location of a diagnostic as the compiler
/// reports it, and classifies whole-file diagnostics.
/// A span between two positions in a source file (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineSpan {
    pub start: LinePosition,
    pub end: LinePosition,
}

/// A position in a source file (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LinePosition {
    pub line: usize,
    pub character: usize,
}

impl LineSpan {
    pub fn new(start: LinePosition, end: LinePosition) -> Self {
        Self { start, end }
    }

    /// Create a span from line/character coordinates
    pub fn from_coords(
        start_line: usize,
        start_character: usize,
        end_line: usize,
        end_character: usize,
    ) -> Self {
        Self {
            start: LinePosition::new(start_line, start_character),
            end: LinePosition::new(end_line, end_character),
        }
    }

    /// The span compilers attach to diagnostics that concern the whole file.
    pub fn file_level() -> Self {
        Self::default()
    }

    /// Whether this span is the collapsed (0,0)-(0,0) whole-file span.
    ///
    /// A genuine zero-width diagnostic at the very start of a file is
    /// indistinguishable from a file-level one and is classified as file-level.
    pub fn is_file_level(&self) -> bool {
        self.start == LinePosition::default() && self.end == LinePosition::default()
    }
}

impl LinePosition {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}
