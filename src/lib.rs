//! # roslyn-suppressions
//!
//! Decides which live compiler diagnostics are already known to a remote
//! analysis server and should be suppressed in the IDE.
//!
//! The server's copy of a file can differ from the buffer being compiled, so
//! diagnostics are matched to server issues by rule id plus either the start
//! line or a whitespace-insensitive checksum of the line.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! suppressor → Entry point: resolve key, fetch candidates, report suppressions
//!   ↓
//! settings   → Settings key from analyzer options
//! issues     → ServerIssue model, settings cache, on-disk settings store
//!   ↓
//! matcher    → Rule id + line/checksum matching
//!   ↓
//! checksum   → Line checksum calculator
//!   ↓
//! base       → Primitives (LineSpan, SourceText, Diagnostic)
//! ```

// ============================================================================
// MODULES (dependency order: base → checksum → matcher → issues/settings → suppressor)
// ============================================================================

/// Foundation types: LineSpan, SourceText, Diagnostic
pub mod base;

/// Line checksums
pub mod checksum;

/// Error types
pub mod error;

/// Server issues: model, cache, on-disk store
pub mod issues;

/// Suppression matching
pub mod matcher;

/// Settings key resolution
pub mod settings;

/// Compiler-facing diagnostic suppressor
pub mod suppressor;

// Re-export commonly needed items
pub use base::{Diagnostic, LinePosition, LineSpan, SourceText};
pub use checksum::{ChecksumCalculator, LineChecksum};
pub use error::{Result, SuppressionError};
pub use issues::{IssueSource, ServerIssue, SettingsCache, SettingsKey, SettingsStore, TextRange};
pub use matcher::{SuppressionMatcher, SuppressionsChecker};
pub use settings::{AnalyzerOptions, AnalyzerOptionsResolver, ResolverConfig, SettingsKeyResolver};
pub use suppressor::{
    DiagnosticSuppressor, SupportedSuppressions, Suppression, SuppressionDescriptor,
    SuppressionSink, SuppressorConfig,
};
