// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Dataset record types for the benchmark harness.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stratification label for a benchmark query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Paraphrased lookup of a populated key; expected to hit.
    #[serde(rename = "match")]
    Match,
    /// Unrelated query; expected to miss.
    #[serde(rename = "neg")]
    Neg,
    /// Semantically adjacent to a populated key but still distinct; expected to miss.
    #[serde(rename = "hard-neg")]
    HardNeg,
    /// Typos, casing, punctuation, very long strings; expected to hit.
    #[serde(rename = "edge")]
    Edge,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 4] = [Self::Match, Self::Neg, Self::HardNeg, Self::Edge];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Neg => "neg",
            Self::HardNeg => "hard-neg",
            Self::Edge => "edge",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One query/answer pair in the evaluation dataset.
///
/// `population_key` is written to the cache during the population phase;
/// `lookup_query` is issued during the lookup phase and may differ textually
/// (that difference is what exercises near-duplicate matching).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub population_key: String,
    pub lookup_query: String,
    pub expected_answer: String,
    pub expected_hit: bool,
    pub category: Category,
}

impl DatasetRecord {
    #[must_use]
    pub fn new(
        population_key: impl Into<String>,
        lookup_query: impl Into<String>,
        expected_answer: impl Into<String>,
        expected_hit: bool,
        category: Category,
    ) -> Self {
        Self {
            population_key: population_key.into(),
            lookup_query: lookup_query.into(),
            expected_answer: expected_answer.into(),
            expected_hit,
            category,
        }
    }
}

/// Per-category record totals for a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub matches: usize,
    pub neg: usize,
    pub hard_neg: usize,
    pub edge: usize,
}

impl CategoryCounts {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.matches + self.neg + self.hard_neg + self.edge
    }

    #[must_use]
    pub const fn for_category(&self, category: Category) -> usize {
        match category {
            Category::Match => self.matches,
            Category::Neg => self.neg,
            Category::HardNeg => self.hard_neg,
            Category::Edge => self.edge,
        }
    }
}

/// Count records per category.
#[must_use]
pub fn composition(records: &[DatasetRecord]) -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    for record in records {
        match record.category {
            Category::Match => counts.matches += 1,
            Category::Neg => counts.neg += 1,
            Category::HardNeg => counts.hard_neg += 1,
            Category::Edge => counts.edge += 1,
        }
    }
    counts
}
