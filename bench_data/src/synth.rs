// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Reproducible synthetic dataset generation for scale runs.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::record::{Category, DatasetRecord};

/// Generate a synthetic dataset of `count` records with roughly `hit_ratio`
/// expected hits. Deterministic for a given seed.
///
/// Hit records get a lightly rephrased lookup of their own population key
/// (`Match` category); miss records get a lookup about an unrelated topic
/// (`Neg` category).
#[must_use]
pub fn generate_dataset(count: usize, hit_ratio: f64, seed: u64) -> Vec<DatasetRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let topic = rng.random_range(0..10_000u32);
            let key = format!("synthetic question {i} about topic {topic}");
            let answer = format!("answer {topic}");

            if rng.random_bool(hit_ratio.clamp(0.0, 1.0)) {
                let lookup = format!("rephrased question {i} regarding topic {topic}");
                DatasetRecord::new(key, lookup, answer, true, Category::Match)
            } else {
                let other: u32 = rng.random_range(10_000..20_000);
                let lookup = format!("unrelated query {i} about subject {other}");
                DatasetRecord::new(key, lookup, answer, false, Category::Neg)
            }
        })
        .collect()
}
