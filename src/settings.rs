//! Settings key resolution — links a compilation to a server project.
//!
//! The IDE passes the key to the compiler in one of two ways:
//!
//! ```text
//! global analyzer option    <settings_key_option> = <key>
//! additional file           .../.sonarlint/<key>/CSharp/SonarLint.xml
//! ```
//!
//! A compilation with neither is not bound to a server project and gets no
//! suppressions.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::issues::SettingsKey;

/// Analyzer configuration visible to the compiler for one compilation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Global `key = value` analyzer options.
    pub global_options: FxHashMap<String, String>,
    /// Additional (non-source) files passed to analyzers.
    pub additional_files: Vec<PathBuf>,
}

impl AnalyzerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a global option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.global_options.insert(key.into(), value.into());
        self
    }

    /// Add an additional file.
    pub fn with_additional_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.additional_files.push(path.into());
        self
    }

    pub fn option(&self, key: &str) -> Option<&str> {
        self.global_options.get(key).map(String::as_str)
    }
}

/// Extracts the settings key of a compilation, if it has one.
pub trait SettingsKeyResolver: Send + Sync {
    fn resolve(&self, options: &AnalyzerOptions) -> Option<SettingsKey>;
}

/// Where [`AnalyzerOptionsResolver`] looks for the settings key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Global analyzer option holding the key.
    pub settings_key_option: String,
    /// File name of the per-project rules file passed as an additional file.
    pub marker_file_name: String,
    /// Directory whose immediate child directory names the key.
    pub settings_root_dir: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            settings_key_option: "sonarlint_internal.suppressions_settings_key".to_string(),
            marker_file_name: "SonarLint.xml".to_string(),
            settings_root_dir: ".sonarlint".to_string(),
        }
    }
}

/// Resolves the settings key from analyzer options.
#[derive(Clone, Debug, Default)]
pub struct AnalyzerOptionsResolver {
    config: ResolverConfig,
}

impl AnalyzerOptionsResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    fn key_from_option(&self, options: &AnalyzerOptions) -> Option<SettingsKey> {
        options
            .option(&self.config.settings_key_option)
            .and_then(SettingsKey::new)
    }

    fn key_from_additional_files(&self, options: &AnalyzerOptions) -> Option<SettingsKey> {
        options
            .additional_files
            .iter()
            .filter(|path| self.is_marker_file(path))
            .find_map(|path| self.key_below_root(path))
    }

    fn is_marker_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(OsStr::to_str)
            .is_some_and(|name| name.eq_ignore_ascii_case(&self.config.marker_file_name))
    }

    /// The directory name right below the last settings root in `path`.
    fn key_below_root(&self, path: &Path) -> Option<SettingsKey> {
        let dirs: Vec<&OsStr> = path
            .parent()?
            .components()
            .filter_map(|c| match c {
                Component::Normal(name) => Some(name),
                _ => None,
            })
            .collect();

        let root = OsStr::new(&self.config.settings_root_dir);
        let root_index = dirs.iter().rposition(|dir| *dir == root)?;
        dirs.get(root_index + 1)
            .and_then(|dir| dir.to_str())
            .and_then(SettingsKey::new)
    }
}

impl SettingsKeyResolver for AnalyzerOptionsResolver {
    fn resolve(&self, options: &AnalyzerOptions) -> Option<SettingsKey> {
        self.key_from_option(options)
            .or_else(|| self.key_from_additional_files(options))
    }
}
