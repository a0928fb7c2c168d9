//! Diagnostic suppressor — the compiler-facing entry point.
//!
//! For each batch of diagnostics the suppressor:
//!
//! ```text
//! resolve settings key      ← SettingsKeyResolver (no key ⇒ stop)
//!     │
//!     ▼
//! fetch candidate issues    ← IssueSource          (none ⇒ stop)
//!     │
//!     ▼
//! match each diagnostic     ← SuppressionsChecker
//!     │
//!     ▼
//! report suppression        → SuppressionSink
//! ```
//!
//! All collaborators are passed in on construction; nothing is looked up
//! from global state.

mod descriptors;

pub use descriptors::{
    DESCRIPTOR_ID_PREFIX, SupportedSuppressions, Suppression, SuppressionDescriptor,
    SuppressorConfig,
};

use tracing::{debug, trace, warn};

use crate::base::Diagnostic;
use crate::error::Result;
use crate::issues::IssueSource;
use crate::matcher::{SuppressionMatcher, SuppressionsChecker};
use crate::settings::{AnalyzerOptions, SettingsKeyResolver};

/// The compiler's channel for reporting suppressions.
pub trait SuppressionSink {
    fn report_suppression(&mut self, suppression: Suppression);
}

impl SuppressionSink for Vec<Suppression> {
    fn report_suppression(&mut self, suppression: Suppression) {
        self.push(suppression);
    }
}

/// Suppresses live diagnostics the analysis server already knows about.
pub struct DiagnosticSuppressor<R, S, M = SuppressionMatcher> {
    resolver: R,
    issues: S,
    checker: M,
    supported: SupportedSuppressions,
}

impl<R, S> DiagnosticSuppressor<R, S>
where
    R: SettingsKeyResolver,
    S: IssueSource,
{
    /// Create a suppressor using the default matcher.
    pub fn new(resolver: R, issues: S, supported: SupportedSuppressions) -> Self {
        Self::with_checker(resolver, issues, SuppressionMatcher::new(), supported)
    }
}

impl<R, S, M> DiagnosticSuppressor<R, S, M>
where
    R: SettingsKeyResolver,
    S: IssueSource,
    M: SuppressionsChecker,
{
    pub fn with_checker(
        resolver: R,
        issues: S,
        checker: M,
        supported: SupportedSuppressions,
    ) -> Self {
        Self {
            resolver,
            issues,
            checker,
            supported,
        }
    }

    /// The rules this suppressor can suppress.
    pub fn supported_suppressions(&self) -> &SupportedSuppressions {
        &self.supported
    }

    /// Report a suppression for every diagnostic that matches a server issue.
    ///
    /// Returns the number of suppressions reported. Diagnostics whose id has
    /// no registered descriptor are not claimed by this suppressor.
    ///
    /// Each diagnostic is decided on its own: a diagnostic the checker
    /// rejects does not stop the rest of the batch from being suppressed.
    /// Once the whole batch is done, the first such error is returned.
    pub fn report_suppressions(
        &self,
        options: &AnalyzerOptions,
        diagnostics: &[Diagnostic],
        sink: &mut impl SuppressionSink,
    ) -> Result<usize> {
        let Some(settings_key) = self.resolver.resolve(options) else {
            debug!("No suppression settings key configured; skipping");
            return Ok(0);
        };

        let issues = self.issues.issues(&settings_key);
        if issues.is_empty() {
            debug!("No suppressed issues for '{}'", settings_key);
            return Ok(0);
        }

        let mut reported = 0;
        let mut first_error = None;
        for diagnostic in diagnostics {
            let Some(descriptor) = self.supported.get(&diagnostic.id) else {
                continue;
            };

            match self.checker.is_suppressed(&issues, diagnostic) {
                Ok(true) => {
                    trace!(
                        "Suppressing {} at line {}",
                        diagnostic.id,
                        diagnostic.span.start.line
                    );
                    sink.report_suppression(Suppression::new(
                        descriptor.clone(),
                        diagnostic.clone(),
                    ));
                    reported += 1;
                }
                Ok(false) => {}
                Err(e) => {
                    warn!("Cannot match {}: {}", diagnostic.id, e);
                    first_error.get_or_insert(e);
                }
            }
        }

        debug!(
            "Suppressed {} of {} diagnostic(s) for '{}'",
            reported,
            diagnostics.len(),
            settings_key
        );
        match first_error {
            Some(e) => Err(e),
            None => Ok(reported),
        }
    }
}
