//! Server-side issues used as suppression records.
//!
//! The analysis server reports which issues are already known for a bound
//! project. The IDE side writes them to a [`SettingsStore`]; compilations read
//! them through a [`SettingsCache`] keyed by [`SettingsKey`].

mod cache;
mod model;
mod store;

pub use cache::{IssueSource, SettingsCache};
pub use model::{ServerIssue, SettingsKey, TextRange};
pub use store::{SettingsFile, SettingsStore};
