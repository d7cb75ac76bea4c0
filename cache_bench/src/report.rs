// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Fixed-width text report rendering. Pure formatting: every figure is
//! computed by the metrics engine before it gets here.

use std::fmt::Write as _;

use bench_data::Category;

use crate::harness::RunOutcome;
use crate::metrics::Observation;

/// Caption data for the report header.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    /// Title line, e.g. the cache-under-test name and variant.
    pub title: String,
    /// Dependency stack of the cache under test, as shown in the summary.
    pub dependencies: String,
}

/// Inner width of the bordered block, in characters.
const INNER_WIDTH: usize = 66;
/// Maximum rendered width of a lookup query in the per-query breakdown.
const DISPLAY_WIDTH: usize = 33;
/// Queries longer than [`DISPLAY_WIDTH`] keep this many leading characters.
const TRUNCATED_LEN: usize = 30;

/// Truncate a lookup query for display: longer than 33 characters renders as
/// the first 30 plus `...`, total width 33.
#[must_use]
pub fn truncate_query(query: &str) -> String {
    if query.chars().count() > DISPLAY_WIDTH {
        let head: String = query.chars().take(TRUNCATED_LEN).collect();
        format!("{head}...")
    } else {
        query.to_string()
    }
}

fn push_line(out: &mut String, content: &str) {
    let _ = writeln!(out, "║{content:<INNER_WIDTH$}║");
}

fn push_row(out: &mut String, label: &str, value: &str) {
    push_line(out, &format!("  {label:<17}{value}"));
}

fn push_border(out: &mut String, left: char, right: char) {
    let _ = writeln!(out, "{left}{}{right}", "═".repeat(INNER_WIDTH));
}

fn breakdown_line(observation: &Observation) -> String {
    let mark = if observation.correct() { '✓' } else { '✗' };
    let tag = if observation.observed_hit { "HIT " } else { "MISS" };
    let category = format!("[{}]", observation.category);
    let query = truncate_query(&observation.lookup_query);
    format!(" {mark} {tag}  {category:<10} {query}")
}

/// Render the full benchmark report.
#[must_use]
pub fn render(meta: &ReportMeta, outcome: &RunOutcome) -> String {
    let m = &outcome.metrics;
    let mut out = String::new();

    push_border(&mut out, '╔', '╗');
    push_line(&mut out, &format!("  {}", meta.title));
    push_border(&mut out, '╠', '╣');

    let composition = format!(
        "{} queries ({} match, {} neg, {} hard, {} edge)",
        m.total,
        m.category_score(Category::Match).total,
        m.category_score(Category::Neg).total,
        m.category_score(Category::HardNeg).total,
        m.category_score(Category::Edge).total,
    );
    push_row(&mut out, "Dataset:", &composition);
    push_row(
        &mut out,
        "Accuracy:",
        &format!(
            "{:.1}% ({}/{} correct)",
            m.accuracy_pct,
            m.true_pos + m.true_neg,
            m.total
        ),
    );
    push_row(&mut out, "True pos:", &format!("{}  (correct hits)", m.true_pos));
    push_row(&mut out, "True neg:", &format!("{}  (correct misses)", m.true_neg));
    push_row(
        &mut out,
        "False pos:",
        &format!("{}  (should miss, got hit)", m.false_pos),
    );
    push_row(
        &mut out,
        "False neg:",
        &format!("{}  (should hit, got miss)", m.false_neg),
    );
    push_row(&mut out, "Raw hits:", &format!("{} / {}", m.raw_hits, m.total));
    push_row(
        &mut out,
        "Populate time:",
        &format!("{:.1}ms", m.population_elapsed.as_secs_f64() * 1000.0),
    );
    push_row(
        &mut out,
        "Total time:",
        &format!("{:.1}ms", m.lookup_elapsed.as_secs_f64() * 1000.0),
    );
    push_row(
        &mut out,
        "Avg latency:",
        &format!("{:.2}ms / query", m.avg_latency_ms),
    );
    push_row(
        &mut out,
        "Latency p50/p99:",
        &format!("{:?} / {:?}", m.latency.p50, m.latency.p99),
    );
    #[allow(clippy::cast_precision_loss)]
    let heap_mb = m.memory.traced_peak_bytes as f64 / (1024.0 * 1024.0);
    push_row(&mut out, "Heap (traced):", &format!("{heap_mb:.2} MB"));
    let rss = m
        .memory
        .rss_mb
        .map_or_else(|| "unavailable".to_string(), |mb| format!("{mb:.2} MB"));
    push_row(&mut out, "RSS (process):", &rss);
    push_row(&mut out, "Dependencies:", &meta.dependencies);

    push_border(&mut out, '╠', '╣');
    for (category, score) in m.per_category {
        if score.total > 0 {
            push_row(
                &mut out,
                &format!("{category}:"),
                &format!("{}/{} correct", score.correct, score.total),
            );
        }
    }

    push_border(&mut out, '╠', '╣');
    push_line(&mut out, "  Per-query breakdown:");
    push_line(&mut out, "  ✓ = correct, ✗ = wrong");
    push_border(&mut out, '╠', '╣');

    for observation in &outcome.observations {
        push_line(&mut out, &breakdown_line(observation));
    }

    push_border(&mut out, '╚', '╝');
    out
}
