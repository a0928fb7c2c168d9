//! Concurrent suppression passes over one shared suppressor and cache.

use std::sync::Arc;

use rayon::prelude::*;
use suppressions::{ServerIssue, SettingsCache, SettingsKey, Suppression};

use crate::helpers::fixtures::*;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_suppressor_is_shareable_across_threads() {
    assert_send_sync::<CacheSuppressor>();
    assert_send_sync::<SettingsCache>();
}

#[test]
fn test_parallel_passes_agree_with_sequential() {
    let source = program();
    let cache = Arc::new(SettingsCache::new());
    for project in 0..8 {
        let key = SettingsKey::new(format!("project-{project}")).unwrap();
        cache.update(key, vec![range_issue("S1135", project % 8, "")]);
    }
    let suppressor = suppressor_over(&cache, &["S1135"]);
    let batch: Vec<_> = (0..9)
        .map(|line| diagnostic_on("S1135", line, &source))
        .collect();

    let results: Vec<Vec<usize>> = (0..64)
        .into_par_iter()
        .map(|pass| {
            let mut sink: Vec<Suppression> = Vec::new();
            suppressor
                .report_suppressions(
                    &options_for(&format!("project-{}", pass % 8)),
                    &batch,
                    &mut sink,
                )
                .unwrap();
            sink.iter().map(|s| s.diagnostic.span.start.line).collect()
        })
        .collect();

    for (pass, lines) in results.iter().enumerate() {
        assert_eq!(lines, &vec![pass % 8], "pass {pass}");
    }
}

#[test]
fn test_refresh_during_passes_never_tears_a_snapshot() {
    let source = program();
    let cache = Arc::new(SettingsCache::new());
    let key = SettingsKey::new("demo").unwrap();
    let both = vec![range_issue("S1135", 5, ""), range_issue("S1135", 6, "")];
    cache.update(key.clone(), both.clone());
    let suppressor = suppressor_over(&cache, &["S1135"]);
    let batch = [
        diagnostic_on("S1135", 5, &source),
        diagnostic_on("S1135", 6, &source),
    ];

    rayon::scope(|scope| {
        scope.spawn(|_| {
            for round in 0..200 {
                let issues: Vec<ServerIssue> = if round % 2 == 0 {
                    Vec::new()
                } else {
                    both.clone()
                };
                cache.update(key.clone(), issues);
            }
        });

        (0..200).into_par_iter().for_each(|_| {
            let mut sink = Vec::new();
            let count = suppressor
                .report_suppressions(&options_for("demo"), &batch, &mut sink)
                .unwrap();
            assert!(count == 0 || count == 2, "saw a partial list: {count}");
        });
    });
}
