// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! The two-phase benchmark protocol: populate, then look up and classify.
//!
//! Strictly sequential: Population → Lookup/Classify → Metrics. Each phase
//! runs to completion before the next starts, and any collaborator failure
//! aborts the run — partial metrics would misrepresent accuracy.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use bench_data::DatasetRecord;
use tracing::debug;

use crate::cache::CacheUnderTest;
use crate::error::{BenchError, Result};
use crate::memory::{self, TraceScope};
use crate::metrics::{
    self, LatencyHistogram, LatencySnapshot, MemorySample, MetricsReport, Observation,
    PhaseTimings,
};

/// Outcome of the population phase.
#[derive(Debug, Clone, Copy)]
pub struct PopulationStats {
    /// Unique population keys written (first occurrence wins).
    pub unique_keys: usize,
    pub elapsed: Duration,
}

/// Outcome of the lookup & classification phase.
#[derive(Debug)]
pub struct LookupStats {
    /// One observation per dataset record, in dataset order.
    pub observations: Vec<Observation>,
    pub elapsed: Duration,
    pub latency: LatencySnapshot,
    pub memory: MemorySample,
}

/// Everything one run produces: aggregate metrics plus the ordered
/// observations the per-query breakdown renders from.
#[derive(Debug)]
pub struct RunOutcome {
    pub metrics: MetricsReport,
    pub observations: Vec<Observation>,
}

/// Population phase: write each unique `population_key` exactly once, in
/// dataset order.
///
/// # Errors
///
/// A failed `put` aborts with [`BenchError::Population`] carrying the key.
pub fn populate<C: CacheUnderTest + ?Sized>(
    cache: &mut C,
    records: &[DatasetRecord],
) -> Result<PopulationStats> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    let start = Instant::now();

    for record in records {
        if seen.insert(record.population_key.as_str()) {
            cache
                .put(&record.population_key, &record.expected_answer)
                .map_err(|fault| BenchError::Population {
                    key: record.population_key.clone(),
                    reason: fault.to_string(),
                })?;
        }
    }

    let elapsed = start.elapsed();
    debug!(unique_keys = seen.len(), ?elapsed, "population phase done");
    Ok(PopulationStats {
        unique_keys: seen.len(),
        elapsed,
    })
}

/// Lookup & classification phase: issue every lookup query (duplicates
/// included), record hit/miss against the expected label, and measure
/// latency plus lookup-scoped memory.
///
/// # Errors
///
/// A failed `get` aborts with [`BenchError::Lookup`] carrying the query.
pub fn classify<C: CacheUnderTest + ?Sized>(
    cache: &mut C,
    records: &[DatasetRecord],
) -> Result<LookupStats> {
    // Allocation tracing is scoped to this phase only, so population-time and
    // index-build allocations are not attributed to lookup cost.
    let trace = TraceScope::begin();

    let mut latency = LatencyHistogram::new();
    let mut observations = Vec::with_capacity(records.len());
    let start = Instant::now();

    for record in records {
        let op_start = Instant::now();
        let result = cache
            .get(&record.lookup_query)
            .map_err(|fault| BenchError::Lookup {
                query: record.lookup_query.clone(),
                reason: fault.to_string(),
            })?;
        latency.record(op_start.elapsed());

        observations.push(Observation {
            lookup_query: record.lookup_query.clone(),
            expected_hit: record.expected_hit,
            observed_hit: result.is_some(),
            category: record.category,
        });
    }

    let elapsed = start.elapsed();
    let memory = MemorySample {
        traced_peak_bytes: trace.peak_bytes(),
        rss_mb: memory::sample_rss_mb(),
    };
    debug!(
        lookups = observations.len(),
        ?elapsed,
        peak_bytes = memory.traced_peak_bytes,
        "lookup phase done"
    );

    Ok(LookupStats {
        observations,
        elapsed,
        latency: latency.snapshot(),
        memory,
    })
}

/// Run the full benchmark protocol against `cache`.
///
/// # Errors
///
/// Rejects an empty dataset up front; propagates any phase failure.
pub fn run<C: CacheUnderTest + ?Sized>(
    cache: &mut C,
    records: &[DatasetRecord],
) -> Result<RunOutcome> {
    if records.is_empty() {
        return Err(BenchError::EmptyDataset);
    }

    let population = populate(cache, records)?;
    let lookup = classify(cache, records)?;

    let metrics = metrics::compute(
        &lookup.observations,
        PhaseTimings {
            population: population.elapsed,
            lookup: lookup.elapsed,
        },
        lookup.memory,
        lookup.latency,
    )?;

    Ok(RunOutcome {
        metrics,
        observations: lookup.observations,
    })
}
