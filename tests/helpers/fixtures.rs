//! Builders for diagnostics, issues and suppressors.

use std::sync::Arc;

use suppressions::{
    AnalyzerOptions, AnalyzerOptionsResolver, ChecksumCalculator, Diagnostic, DiagnosticSuppressor,
    LineChecksum, LineSpan, ResolverConfig, ServerIssue, SettingsCache, SourceText,
    SupportedSuppressions, SuppressorConfig, TextRange,
};

/// A small C# file; line numbers below refer to it.
pub const PROGRAM: &str = concat!(
    "using System;\r\n",
    "namespace Demo\r\n",
    "{\r\n",
    "    class Program\r\n",
    "    {\r\n",
    "        // TODO: remove\r\n",
    "        static void Main() { Console.WriteLine(\"hi\"); }\r\n",
    "    }\r\n",
    "}\r\n",
);

pub const SETTINGS_KEY_OPTION: &str = "sonarlint_internal.suppressions_settings_key";

pub fn program() -> Arc<SourceText> {
    Arc::new(SourceText::new(PROGRAM))
}

/// A diagnostic spanning columns 8..20 of `line`.
pub fn diagnostic_on(id: &str, line: usize, source: &Arc<SourceText>) -> Diagnostic {
    Diagnostic::new(id, LineSpan::from_coords(line, 8, line, 20), Arc::clone(source))
}

pub fn file_level_diagnostic(id: &str, source: &Arc<SourceText>) -> Diagnostic {
    Diagnostic::new(id, LineSpan::file_level(), Arc::clone(source))
}

pub fn line_hash(text: &str) -> String {
    LineChecksum.calculate(text)
}

pub fn range_issue(rule: &str, start_line: usize, hash: impl Into<String>) -> ServerIssue {
    ServerIssue::new(rule, TextRange::new(start_line, start_line), hash)
}

pub fn options_for(key: &str) -> AnalyzerOptions {
    AnalyzerOptions::new().with_option(SETTINGS_KEY_OPTION, key)
}

pub fn supported(rules: &[&str]) -> SupportedSuppressions {
    SupportedSuppressions::from_rule_ids(rules, &SuppressorConfig::default())
        .expect("rule ids are non-empty")
}

pub type CacheSuppressor = DiagnosticSuppressor<AnalyzerOptionsResolver, Arc<SettingsCache>>;

/// A suppressor over a shared cache, resolving keys with the default config.
pub fn suppressor_over(cache: &Arc<SettingsCache>, rules: &[&str]) -> CacheSuppressor {
    DiagnosticSuppressor::new(
        AnalyzerOptionsResolver::new(ResolverConfig::default()),
        Arc::clone(cache),
        supported(rules),
    )
}
