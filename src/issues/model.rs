//! Data structures for server-reported issues.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// An issue previously reported by the analysis server.
///
/// The server is the source of truth for "already known": a live diagnostic
/// that matches one of these records is suppressed in the IDE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerIssue {
    /// Rule identifier, compared case-insensitively with diagnostic ids.
    pub rule_id: SmolStr,

    /// Lines the issue covers.
    ///
    /// `None` means the issue concerns the whole file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_range: Option<TextRange>,

    /// Checksum of the line the issue was raised on.
    #[serde(default)]
    pub hash: String,
}

/// Line range of a server issue, in the compiler's 0-indexed numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRange {
    pub start_line: usize,
    pub end_line: usize,
}

impl TextRange {
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
        }
    }
}

impl ServerIssue {
    /// Create an issue attached to a range of lines.
    pub fn new(rule_id: impl Into<SmolStr>, text_range: TextRange, hash: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            text_range: Some(text_range),
            hash: hash.into(),
        }
    }

    /// Create an issue that applies to the whole file.
    pub fn file_level(rule_id: impl Into<SmolStr>, hash: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            text_range: None,
            hash: hash.into(),
        }
    }

    /// Whether the issue applies to the whole file.
    pub fn is_file_level(&self) -> bool {
        self.text_range.is_none()
    }
}

/// Opaque key linking a compilation to a server project's suppressions.
///
/// Never empty: blank keys are rejected so that "no key" has exactly one
/// representation, `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SettingsKey(SmolStr);

impl SettingsKey {
    /// Create a key, or `None` if `key` is empty or whitespace.
    pub fn new(key: impl AsRef<str>) -> Option<Self> {
        let key = key.as_ref().trim();
        (!key.is_empty()).then(|| Self(SmolStr::new(key)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SettingsKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
