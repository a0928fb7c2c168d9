//! Suppression descriptors — one per rule id the suppressor claims.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smol_str::{SmolStr, format_smolstr};

use crate::base::Diagnostic;
use crate::error::{Result, SuppressionError};

/// Prefix of every descriptor id.
pub const DESCRIPTOR_ID_PREFIX: &str = "SLS_";

/// Registration of a suppression for one rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SuppressionDescriptor {
    /// Unique id of the suppression itself.
    pub id: SmolStr,
    /// Rule id of the diagnostics this descriptor suppresses.
    pub suppressed_diagnostic_id: SmolStr,
    /// Why matching diagnostics are hidden.
    pub justification: SmolStr,
}

/// A suppression of one diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suppression {
    pub descriptor: SuppressionDescriptor,
    pub diagnostic: Diagnostic,
}

impl Suppression {
    pub fn new(descriptor: SuppressionDescriptor, diagnostic: Diagnostic) -> Self {
        Self {
            descriptor,
            diagnostic,
        }
    }
}

/// Settings shared by every registered descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuppressorConfig {
    pub justification: String,
}

impl Default for SuppressorConfig {
    fn default() -> Self {
        Self {
            justification: "Issue is suppressed on the server".to_string(),
        }
    }
}

/// The fixed set of rules a suppressor can suppress, keyed by rule id.
///
/// Built once before any matching happens; registration order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportedSuppressions {
    descriptors: IndexMap<SmolStr, SuppressionDescriptor>,
}

impl SupportedSuppressions {
    /// Register one descriptor per distinct rule id.
    pub fn from_rule_ids<I, S>(rule_ids: I, config: &SuppressorConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let justification = SmolStr::new(&config.justification);
        let mut descriptors = IndexMap::new();

        for rule_id in rule_ids {
            let rule_id = rule_id.as_ref();
            if rule_id.is_empty() {
                return Err(SuppressionError::EmptyRuleId);
            }
            descriptors
                .entry(SmolStr::new(rule_id))
                .or_insert_with(|| SuppressionDescriptor {
                    id: format_smolstr!("{DESCRIPTOR_ID_PREFIX}{rule_id}"),
                    suppressed_diagnostic_id: SmolStr::new(rule_id),
                    justification: justification.clone(),
                });
        }

        Ok(Self { descriptors })
    }

    /// Descriptor registered for exactly this diagnostic id.
    pub fn get(&self, diagnostic_id: &str) -> Option<&SuppressionDescriptor> {
        self.descriptors.get(diagnostic_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SuppressionDescriptor> {
        self.descriptors.values()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
