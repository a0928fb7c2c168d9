//! Source text with line lookup.

use std::ops::Range;

/// The full text of a source file as the compiler currently sees it.
///
/// Line boundaries are computed once on construction. `\r\n`, `\n` and `\r`
/// all terminate a line and are never part of the returned line text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    text: String,
    /// Byte range of each line's content, terminator excluded.
    lines: Vec<Range<usize>>,
}

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = line_ranges(&text);
        Self { text, lines }
    }

    /// The whole text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of lines. An empty text has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of the 0-indexed line `line`, without its terminator.
    pub fn line(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(|range| &self.text[range.clone()])
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SourceText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

fn line_ranges(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                lines.push(start..i);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            b'\n' => {
                lines.push(start..i);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }

    lines.push(start..bytes.len());
    lines
}
