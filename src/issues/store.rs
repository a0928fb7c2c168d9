//! On-disk suppression settings, one JSON file per settings key.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::model::{ServerIssue, SettingsKey};
use crate::error::{Result, SuppressionError};

/// Contents of a settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub issues: Vec<ServerIssue>,
}

/// A directory of `<key>.json` settings files.
///
/// The IDE side writes a file whenever it refreshes the suppressed issues of
/// a bound project; the compiler side only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the settings file for `key`.
    ///
    /// Always a direct child of the store directory, whatever the key holds.
    pub fn path_for(&self, key: &SettingsKey) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(key)))
    }

    /// Read the issues stored for `key`.
    ///
    /// Returns `Ok(None)` if no file exists for the key.
    pub fn read(&self, key: &SettingsKey) -> Result<Option<Vec<ServerIssue>>> {
        let path = self.path_for(key);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let file: SettingsFile = serde_json::from_str(&content)
            .map_err(|e| SuppressionError::invalid_settings(&path, e))?;
        Ok(Some(file.issues))
    }

    /// Write the issues for `key`, replacing any previous file.
    pub fn write(&self, key: &SettingsKey, issues: &[ServerIssue]) -> Result<()> {
        let file = SettingsFile {
            issues: issues.to_vec(),
        };
        let path = self.path_for(key);
        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| SuppressionError::invalid_settings(&path, e))?;

        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Percent-escape every byte of `key` outside `[A-Za-z0-9_-]`.
///
/// Separators and `.` never survive, so the stem is a single path component
/// and distinct keys map to distinct stems.
fn file_stem(key: &SettingsKey) -> String {
    let mut stem = String::with_capacity(key.as_str().len());
    for byte in key.as_str().bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            stem.push(char::from(byte));
        } else {
            let _ = write!(stem, "%{byte:02X}");
        }
    }
    stem
}
