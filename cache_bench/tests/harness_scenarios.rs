// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! End-to-end harness scenarios driven through scripted cache doubles.

use peak_alloc::PeakAlloc;

use bench_data::{Category, DatasetRecord};
use cache_bench::{harness, report, BenchError, ReportMeta, ScriptedCache};

#[global_allocator]
static PEAK_ALLOC: PeakAlloc = PeakAlloc;

fn two_record_dataset() -> Vec<DatasetRecord> {
    vec![
        DatasetRecord::new("k1", "k1", "a1", true, Category::Match),
        DatasetRecord::new("k2", "k3", "a2", false, Category::Neg),
    ]
}

fn meta() -> ReportMeta {
    ReportMeta {
        title: "scenario".into(),
        dependencies: "scripted double".into(),
    }
}

#[test]
fn scenario_perfect_classification() {
    // Cache answers for "k1", stays silent for "k3".
    let mut cache = ScriptedCache::with_hits(["k1"]);
    let outcome = harness::run(&mut cache, &two_record_dataset()).unwrap();

    let m = &outcome.metrics;
    assert_eq!(m.true_pos, 1);
    assert_eq!(m.true_neg, 1);
    assert_eq!(m.false_pos, 0);
    assert_eq!(m.false_neg, 0);
    assert!((m.accuracy_pct - 100.0).abs() < 1e-9);
    assert_eq!(cache.puts, vec!["k1".to_string(), "k2".to_string()]);
}

#[test]
fn scenario_always_miss_cache() {
    let mut cache = ScriptedCache::always_miss();
    let outcome = harness::run(&mut cache, &two_record_dataset()).unwrap();

    let m = &outcome.metrics;
    assert_eq!(m.true_pos, 0);
    assert_eq!(m.true_neg, 1);
    assert_eq!(m.false_pos, 0);
    assert_eq!(m.false_neg, 1);
    assert!((m.accuracy_pct - 50.0).abs() < 1e-9);
    assert_eq!(m.raw_hits, 0);
}

#[test]
fn scenario_duplicate_population_key() {
    // "k1" appears twice with different lookups: one put, two observations.
    let records = vec![
        DatasetRecord::new("k1", "first lookup", "a1", true, Category::Match),
        DatasetRecord::new("k1", "second lookup", "a1", true, Category::Edge),
        DatasetRecord::new("k2", "third lookup", "a2", false, Category::Neg),
    ];
    let mut cache = ScriptedCache::with_hits(["first lookup", "second lookup"]);
    let outcome = harness::run(&mut cache, &records).unwrap();

    assert_eq!(cache.puts, vec!["k1".to_string(), "k2".to_string()]);
    assert_eq!(outcome.observations.len(), 3);
    assert_eq!(outcome.metrics.true_pos, 2);
    assert_eq!(outcome.metrics.true_neg, 1);

    let rendered = report::render(&meta(), &outcome);
    assert!(rendered.contains("first lookup"));
    assert!(rendered.contains("second lookup"));
}

#[test]
fn scenario_collaborator_failure_aborts_run() {
    let mut cache = ScriptedCache::with_hits(["k1"]).failing_get("k3");
    let err = harness::run(&mut cache, &two_record_dataset()).unwrap_err();
    assert!(matches!(err, BenchError::Lookup { query, .. } if query == "k3"));

    let mut cache = ScriptedCache::always_miss().failing_put("k2");
    let err = harness::run(&mut cache, &two_record_dataset()).unwrap_err();
    assert!(matches!(err, BenchError::Population { key, .. } if key == "k2"));
}

#[test]
fn builtin_dataset_against_scripted_semantic_oracle() {
    // A double that hits exactly the expected-hit lookups behaves like an
    // ideal semantic cache: the report must come out 100% accurate.
    let records = bench_data::builtin();
    let hits = records
        .iter()
        .filter(|r| r.expected_hit)
        .map(|r| r.lookup_query.clone());
    let mut cache = ScriptedCache::with_hits(hits);

    let outcome = harness::run(&mut cache, &records).unwrap();
    let m = &outcome.metrics;

    assert_eq!(m.total, 75);
    assert_eq!(m.true_pos, 50);
    assert_eq!(m.true_neg, 25);
    assert!((m.accuracy_pct - 100.0).abs() < 1e-9);
    assert_eq!(m.category_score(Category::Match).total, 40);
    assert_eq!(m.category_score(Category::Neg).total, 15);
    assert_eq!(m.category_score(Category::HardNeg).total, 10);
    assert_eq!(m.category_score(Category::Edge).total, 10);

    let rendered = report::render(&meta(), &outcome);
    assert!(rendered.contains("75 queries (40 match, 15 neg, 10 hard, 10 edge)"));
    assert!(rendered.contains("match:"));
    assert!(rendered.contains("40/40 correct"));
    // The long honey-bee query renders truncated with an ellipsis marker.
    assert!(rendered.contains("can you explain in detail the ..."));
}

#[test]
fn lookup_phase_traced_allocations_are_visible() {
    // PeakAlloc is this test binary's global allocator, so lookups that
    // allocate (String results, observation buffers) must register a peak.
    let records = bench_data::builtin();
    let hits = records.iter().map(|r| r.lookup_query.clone());
    let mut cache = ScriptedCache::with_hits(hits);

    let outcome = harness::run(&mut cache, &records).unwrap();
    assert!(outcome.metrics.memory.traced_peak_bytes > 0);
    assert_eq!(outcome.metrics.latency.count, 75);
}

#[test]
fn observations_preserve_dataset_order() {
    let records = bench_data::builtin();
    let mut cache = ScriptedCache::always_miss();
    let outcome = harness::run(&mut cache, &records).unwrap();

    let expected: Vec<&str> = records.iter().map(|r| r.lookup_query.as_str()).collect();
    let got: Vec<&str> = outcome
        .observations
        .iter()
        .map(|o| o.lookup_query.as_str())
        .collect();
    assert_eq!(got, expected);
}
