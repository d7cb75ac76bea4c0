// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Two-phase hit/miss classification benchmark for semantic caches.
//!
//! The harness populates a cache under test with a dataset of query/answer
//! pairs, replays the dataset's lookup queries, classifies each observed
//! hit/miss against the expected label, and renders a fixed-width report
//! with a confusion matrix, per-category accuracy, latency, and memory
//! figures.
//!
//! # Example
//!
//! ```
//! use cache_bench::{harness, report, ExactLruCache, ReportMeta};
//!
//! let records = bench_data::builtin();
//! let mut cache = ExactLruCache::new(1024);
//! let outcome = harness::run(&mut cache, &records).unwrap();
//! let meta = ReportMeta {
//!     title: "exact-match LRU baseline".into(),
//!     dependencies: "std collections".into(),
//! };
//! println!("{}", report::render(&meta, &outcome));
//! ```

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

pub mod cache;
pub mod error;
pub mod harness;
pub mod memory;
pub mod metrics;
pub mod report;

pub use cache::{CacheFault, CacheUnderTest, ExactLruCache, ScriptedCache};
pub use error::{BenchError, Result};
pub use harness::{classify, populate, run, LookupStats, PopulationStats, RunOutcome};
pub use memory::{host_os_family, rss_mb_from_raw, sample_rss_mb, OsFamily, TraceScope};
pub use metrics::{
    CategoryScore, LatencyHistogram, LatencySnapshot, MemorySample, MetricsReport, Observation,
    PhaseTimings,
};
pub use report::{render, truncate_query, ReportMeta};
