//! Process-wide cache of server issues, keyed by settings key.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::model::{ServerIssue, SettingsKey};
use super::store::SettingsStore;

/// Source of candidate server issues for a settings key.
///
/// Implementations hand out immutable snapshots; the suppression core never
/// locks or mutates them.
pub trait IssueSource: Send + Sync {
    /// The current issues for `key`. Unknown keys yield an empty list.
    fn issues(&self, key: &SettingsKey) -> Arc<[ServerIssue]>;
}

impl<T: IssueSource + ?Sized> IssueSource for Arc<T> {
    fn issues(&self, key: &SettingsKey) -> Arc<[ServerIssue]> {
        (**self).issues(key)
    }
}

/// Read-mostly cache of server issues shared by concurrent compilations.
///
/// A refresh replaces a key's whole list, so readers always observe either
/// the old or the new snapshot. When backed by a [`SettingsStore`], a missing
/// entry is loaded from disk on first read and kept until invalidated; a key
/// with no readable file is remembered as empty so the disk is read once.
#[derive(Debug, Default)]
pub struct SettingsCache {
    entries: RwLock<FxHashMap<SettingsKey, Arc<[ServerIssue]>>>,
    store: Option<SettingsStore>,
}

impl SettingsCache {
    /// Create an in-memory cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache that falls back to `store` for unknown keys.
    pub fn with_store(store: SettingsStore) -> Self {
        Self {
            entries: RwLock::default(),
            store: Some(store),
        }
    }

    /// Replace the issues for `key`.
    pub fn update(&self, key: SettingsKey, issues: impl Into<Arc<[ServerIssue]>>) {
        let issues = issues.into();
        debug!("Updating {} suppressed issue(s) for '{}'", issues.len(), key);
        self.entries.write().insert(key, issues);
    }

    /// Drop the cached issues for `key`; a store-backed cache reloads them on next read.
    pub fn invalidate(&self, key: &SettingsKey) {
        self.entries.write().remove(key);
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Number of keys currently held in memory.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Load `key` from the store and remember the result, including a miss.
    fn load(&self, key: &SettingsKey) -> Option<Arc<[ServerIssue]>> {
        let store = self.store.as_ref()?;
        let issues: Arc<[ServerIssue]> = match store.read(key) {
            Ok(Some(issues)) => issues.into(),
            Ok(None) => {
                debug!("No suppression settings file for '{}'", key);
                Arc::from([])
            }
            Err(e) => {
                warn!("Failed to load suppression settings for '{}': {}", key, e);
                Arc::from([])
            }
        };

        let mut entries = self.entries.write();
        // A concurrent reader or an explicit update may have won the race.
        let entry = entries.entry(key.clone()).or_insert(issues);
        Some(Arc::clone(entry))
    }
}

impl IssueSource for SettingsCache {
    fn issues(&self, key: &SettingsKey) -> Arc<[ServerIssue]> {
        if let Some(issues) = self.entries.read().get(key) {
            return Arc::clone(issues);
        }

        self.load(key).unwrap_or_else(|| Arc::from([]))
    }
}
