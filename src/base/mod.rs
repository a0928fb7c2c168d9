//! Foundation types for the suppression core.
//!
//! This module provides the compiler-facing input types:
//! - [`LinePosition`], [`LineSpan`] - 0-indexed line/character locations
//! - [`SourceText`] - File text with line lookup
//! - [`Diagnostic`] - A live rule violation tied to a span
//!
//! This module has NO dependencies on other modules of this crate.

mod diagnostic;
mod position;
mod text;

pub use diagnostic::Diagnostic;
pub use position::{LinePosition, LineSpan};
pub use text::SourceText;
