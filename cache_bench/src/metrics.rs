// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Classification metrics over the recorded observations.

use std::time::Duration;

use bench_data::Category;
use hdrhistogram::Histogram;

use crate::error::{BenchError, Result};

/// One lookup outcome, in dataset order. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub lookup_query: String,
    pub expected_hit: bool,
    pub observed_hit: bool,
    pub category: Category,
}

impl Observation {
    /// Whether the cache classified this lookup as the dataset expected.
    #[must_use]
    pub const fn correct(&self) -> bool {
        self.expected_hit == self.observed_hit
    }
}

/// Per-query latency histogram with percentile snapshots.
pub struct LatencyHistogram {
    histogram: Histogram<u64>,
}

impl LatencyHistogram {
    #[must_use]
    pub fn new() -> Self {
        Self {
            histogram: Histogram::new(3).expect("histogram creation"),
        }
    }

    /// Record one lookup's latency.
    pub fn record(&mut self, duration: Duration) {
        let micros = duration.as_micros() as u64;
        let _ = self.histogram.record(micros);
    }

    /// Get a snapshot of the current statistics.
    #[must_use]
    pub fn snapshot(&self) -> LatencySnapshot {
        LatencySnapshot {
            count: self.histogram.len(),
            p50: Duration::from_micros(self.histogram.value_at_quantile(0.5)),
            p99: Duration::from_micros(self.histogram.value_at_quantile(0.99)),
            max: Duration::from_micros(self.histogram.max()),
            mean: Duration::from_micros(self.histogram.mean() as u64),
        }
    }
}

impl Default for LatencyHistogram {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of per-query latency statistics.
#[derive(Debug, Clone)]
pub struct LatencySnapshot {
    pub count: u64,
    pub p50: Duration,
    pub p99: Duration,
    pub max: Duration,
    pub mean: Duration,
}

impl std::fmt::Display for LatencySnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n={} p50={:?} p99={:?} max={:?}",
            self.count, self.p50, self.p99, self.max
        )
    }
}

/// Correct/total counts for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryScore {
    pub correct: usize,
    pub total: usize,
}

/// Wall-clock elapsed time per phase.
#[derive(Debug, Clone, Copy)]
pub struct PhaseTimings {
    pub population: Duration,
    pub lookup: Duration,
}

/// Memory figures sampled around the lookup phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemorySample {
    /// Traced allocation high-water mark during the lookup phase, bytes.
    pub traced_peak_bytes: usize,
    /// Peak process RSS, normalized to megabytes. `None` when the platform
    /// exposes no sample.
    pub rss_mb: Option<f64>,
}

/// Aggregate statistics for one benchmark run. Derived, never persisted.
#[derive(Debug, Clone)]
pub struct MetricsReport {
    pub total: usize,
    pub true_pos: usize,
    pub true_neg: usize,
    pub false_pos: usize,
    pub false_neg: usize,
    /// `(tp + tn) / total * 100`.
    pub accuracy_pct: f64,
    /// Observed-hit count regardless of correctness: `tp + fp`.
    pub raw_hits: usize,
    /// Scores for all four categories in report order; zero-total categories
    /// are present here and skipped by the renderer.
    pub per_category: [(Category, CategoryScore); 4],
    pub population_elapsed: Duration,
    pub lookup_elapsed: Duration,
    /// `lookup_elapsed / total`, in milliseconds.
    pub avg_latency_ms: f64,
    pub latency: LatencySnapshot,
    pub memory: MemorySample,
}

impl MetricsReport {
    /// Score for one category.
    #[must_use]
    pub fn category_score(&self, category: Category) -> CategoryScore {
        self.per_category
            .iter()
            .find(|(c, _)| *c == category)
            .map_or_else(CategoryScore::default, |(_, score)| *score)
    }
}

/// Compute the confusion matrix and aggregate statistics from the recorded
/// observations. Pure; does not mutate or reorder its inputs.
///
/// # Errors
///
/// Returns [`BenchError::EmptyDataset`] for zero observations — accuracy is
/// undefined there and the caller violated the non-empty precondition.
pub fn compute(
    observations: &[Observation],
    timings: PhaseTimings,
    memory: MemorySample,
    latency: LatencySnapshot,
) -> Result<MetricsReport> {
    let total = observations.len();
    if total == 0 {
        return Err(BenchError::EmptyDataset);
    }

    let mut true_pos = 0;
    let mut true_neg = 0;
    let mut false_pos = 0;
    let mut false_neg = 0;

    let mut per_category =
        Category::ALL.map(|category| (category, CategoryScore::default()));

    for observation in observations {
        match (observation.expected_hit, observation.observed_hit) {
            (true, true) => true_pos += 1,
            (false, false) => true_neg += 1,
            (false, true) => false_pos += 1,
            (true, false) => false_neg += 1,
        }

        let slot = per_category
            .iter_mut()
            .find(|(c, _)| *c == observation.category)
            .map(|(_, score)| score)
            .expect("Category::ALL covers every variant");
        slot.total += 1;
        if observation.correct() {
            slot.correct += 1;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let accuracy_pct = (true_pos + true_neg) as f64 / total as f64 * 100.0;
    #[allow(clippy::cast_precision_loss)]
    let avg_latency_ms = timings.lookup.as_secs_f64() / total as f64 * 1000.0;

    Ok(MetricsReport {
        total,
        true_pos,
        true_neg,
        false_pos,
        false_neg,
        accuracy_pct,
        raw_hits: true_pos + false_pos,
        per_category,
        population_elapsed: timings.population,
        lookup_elapsed: timings.lookup,
        avg_latency_ms,
        latency,
        memory,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(expected: bool, observed: bool, category: Category) -> Observation {
        Observation {
            lookup_query: format!("q {expected} {observed}"),
            expected_hit: expected,
            observed_hit: observed,
            category,
        }
    }

    fn timings() -> PhaseTimings {
        PhaseTimings {
            population: Duration::from_millis(5),
            lookup: Duration::from_millis(10),
        }
    }

    fn snapshot() -> LatencySnapshot {
        LatencyHistogram::new().snapshot()
    }

    #[test]
    fn test_confusion_matrix_counts() {
        let observations = vec![
            obs(true, true, Category::Match),
            obs(true, false, Category::Match),
            obs(false, false, Category::Neg),
            obs(false, true, Category::HardNeg),
            obs(true, true, Category::Edge),
        ];
        let report =
            compute(&observations, timings(), MemorySample::default(), snapshot()).unwrap();

        assert_eq!(report.true_pos, 2);
        assert_eq!(report.true_neg, 1);
        assert_eq!(report.false_pos, 1);
        assert_eq!(report.false_neg, 1);
        assert_eq!(
            report.true_pos + report.true_neg + report.false_pos + report.false_neg,
            report.total
        );
        assert_eq!(report.raw_hits, 3);
        assert!((report.accuracy_pct - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_raw_hits_equals_observed_hit_count() {
        let observations = vec![
            obs(true, true, Category::Match),
            obs(false, true, Category::Neg),
            obs(false, false, Category::Neg),
        ];
        let report =
            compute(&observations, timings(), MemorySample::default(), snapshot()).unwrap();
        let observed_hits = observations.iter().filter(|o| o.observed_hit).count();
        assert_eq!(report.raw_hits, observed_hits);
        assert_eq!(report.raw_hits, report.true_pos + report.false_pos);
    }

    #[test]
    fn test_accuracy_bounds() {
        let all_correct = vec![obs(true, true, Category::Match); 4];
        let report =
            compute(&all_correct, timings(), MemorySample::default(), snapshot()).unwrap();
        assert!((report.accuracy_pct - 100.0).abs() < 1e-9);

        let all_wrong = vec![obs(true, false, Category::Match); 4];
        let report = compute(&all_wrong, timings(), MemorySample::default(), snapshot()).unwrap();
        assert!(report.accuracy_pct.abs() < 1e-9);
    }

    #[test]
    fn test_per_category_totals() {
        let observations = vec![
            obs(true, true, Category::Match),
            obs(true, false, Category::Match),
            obs(false, false, Category::Neg),
        ];
        let report =
            compute(&observations, timings(), MemorySample::default(), snapshot()).unwrap();

        let matches = report.category_score(Category::Match);
        assert_eq!(matches.total, 2);
        assert_eq!(matches.correct, 1);

        let neg = report.category_score(Category::Neg);
        assert_eq!(neg.total, 1);
        assert_eq!(neg.correct, 1);

        assert_eq!(report.category_score(Category::Edge).total, 0);
        assert_eq!(report.category_score(Category::HardNeg).total, 0);
    }

    #[test]
    fn test_empty_observations_rejected() {
        let err = compute(&[], timings(), MemorySample::default(), snapshot()).unwrap_err();
        assert_eq!(err, BenchError::EmptyDataset);
    }

    #[test]
    fn test_avg_latency_per_query() {
        let observations = vec![
            obs(true, true, Category::Match),
            obs(false, false, Category::Neg),
        ];
        let report =
            compute(&observations, timings(), MemorySample::default(), snapshot()).unwrap();
        // 10ms over 2 queries.
        assert!((report.avg_latency_ms - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_latency_histogram_snapshot() {
        let mut hist = LatencyHistogram::new();
        for i in 1..=100u64 {
            hist.record(Duration::from_micros(i));
        }
        let snap = hist.snapshot();
        assert_eq!(snap.count, 100);
        assert!(snap.p50 >= Duration::from_micros(40));
        assert!(snap.p50 <= Duration::from_micros(60));
        assert!(snap.max >= snap.p99);
    }
}
