//! Suppression matching — decides whether a live diagnostic is already known
//! to the server.
//!
//! A diagnostic matches a server issue when the rule ids are equal ignoring
//! case and the locations agree:
//!
//! - **File-level diagnostic** (span `(0,0)-(0,0)`): the issue must be
//!   file-level too.
//! - **Range diagnostic**: the start lines are equal, *or* the checksum of
//!   the diagnostic's end line equals the issue's hash. Either criterion alone
//!   is enough, so an issue on a line that moved because of edits elsewhere in
//!   the file is still suppressed.

use std::cell::OnceCell;

use crate::base::Diagnostic;
use crate::checksum::{ChecksumCalculator, LineChecksum};
use crate::error::{Result, SuppressionError};
use crate::issues::ServerIssue;

/// Decides whether a diagnostic is covered by a list of server issues.
pub trait SuppressionsChecker: Send + Sync {
    fn is_suppressed(&self, issues: &[ServerIssue], diagnostic: &Diagnostic) -> Result<bool>;
}

/// Rule-id and location matcher. Stateless; share it freely across threads.
#[derive(Clone, Debug, Default)]
pub struct SuppressionMatcher<C = LineChecksum> {
    checksum: C,
}

impl SuppressionMatcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: ChecksumCalculator> SuppressionMatcher<C> {
    /// Create a matcher that fingerprints lines with `checksum`.
    pub fn with_checksum(checksum: C) -> Self {
        Self { checksum }
    }

    fn is_match(
        &self,
        diagnostic: &Diagnostic,
        issue: &ServerIssue,
        line_hash: &OnceCell<String>,
    ) -> Result<bool> {
        if !diagnostic.id.eq_ignore_ascii_case(&issue.rule_id) {
            return Ok(false);
        }

        if diagnostic.is_file_level() {
            return Ok(issue.is_file_level());
        }

        let start_line = diagnostic.span.start.line;
        if issue.text_range.is_some_and(|range| range.start_line == start_line) {
            return Ok(true);
        }

        let hash = match line_hash.get() {
            Some(hash) => hash,
            None => {
                let line = end_line_text(diagnostic)?;
                line_hash.get_or_init(|| self.checksum.calculate(line))
            }
        };
        Ok(*hash == issue.hash)
    }
}

impl<C: ChecksumCalculator> SuppressionsChecker for SuppressionMatcher<C> {
    fn is_suppressed(&self, issues: &[ServerIssue], diagnostic: &Diagnostic) -> Result<bool> {
        // The end line is hashed at most once per diagnostic, and only when needed.
        let line_hash = OnceCell::new();
        for issue in issues {
            if self.is_match(diagnostic, issue, &line_hash)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

fn end_line_text(diagnostic: &Diagnostic) -> Result<&str> {
    let line = diagnostic.span.end.line;
    diagnostic
        .line_text_at_end()
        .ok_or(SuppressionError::LineOutOfRange {
            line,
            line_count: diagnostic.source.line_count(),
        })
}
