// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Benchmark driver: runs the built-in evaluation dataset against the
//! exact-match LRU baseline and prints the report to stdout.

use peak_alloc::PeakAlloc;

use cache_bench::{harness, report, ExactLruCache, ReportMeta};

#[global_allocator]
static PEAK_ALLOC: PeakAlloc = PeakAlloc;

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cache_bench=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let records = bench_data::builtin();
    tracing::info!(
        records = records.len(),
        composition = %format_composition(&records),
        "starting benchmark run"
    );

    let mut cache = ExactLruCache::new(1024);
    let meta = ReportMeta {
        title: "cache_bench — exact-match LRU baseline".into(),
        dependencies: "std collections (no similarity matching)".into(),
    };

    match harness::run(&mut cache, &records) {
        Ok(outcome) => print!("{}", report::render(&meta, &outcome)),
        Err(err) => {
            eprintln!("cache_bench: {err}");
            std::process::exit(1);
        }
    }
}

fn format_composition(records: &[bench_data::DatasetRecord]) -> String {
    let counts = bench_data::composition(records);
    format!(
        "{} match / {} neg / {} hard-neg / {} edge",
        counts.matches, counts.neg, counts.hard_neg, counts.edge
    )
}
