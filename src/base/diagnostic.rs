//! Diagnostic — a rule violation reported by a live analysis pass.

use std::sync::Arc;

use smol_str::SmolStr;

use super::position::LineSpan;
use super::text::SourceText;

/// A diagnostic produced by the compiler for one source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Rule identifier (e.g., "S1135").
    pub id: SmolStr,
    /// Location of the diagnostic in `source`.
    pub span: LineSpan,
    /// The text of the file the diagnostic belongs to.
    pub source: Arc<SourceText>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(id: impl Into<SmolStr>, span: LineSpan, source: Arc<SourceText>) -> Self {
        Self {
            id: id.into(),
            span,
            source,
        }
    }

    /// Whether the compiler attached this diagnostic to the whole file.
    pub fn is_file_level(&self) -> bool {
        self.span.is_file_level()
    }

    /// Text of the line the diagnostic ends on.
    pub fn line_text_at_end(&self) -> Option<&str> {
        self.source.line(self.span.end.line)
    }
}
