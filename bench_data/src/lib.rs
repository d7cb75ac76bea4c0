// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Evaluation datasets for the semantic cache benchmark harness.
//!
//! Provides the record/category types, the built-in 75-query evaluation set,
//! a JSON fixture loader, and a seeded synthetic generator for scale runs.

pub mod builtin;
pub mod record;
pub mod synth;

pub use builtin::builtin;
pub use record::{composition, Category, CategoryCounts, DatasetRecord};
pub use synth::generate_dataset;

use std::io::Read;

/// Load a dataset from a JSON array of records.
///
/// # Errors
///
/// Returns a `serde_json::Error` if the input is not a valid record array.
pub fn from_json_str(json: &str) -> Result<Vec<DatasetRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load a dataset from a reader producing a JSON array of records.
///
/// # Errors
///
/// Returns a `serde_json::Error` on malformed input or read failure.
pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<DatasetRecord>, serde_json::Error> {
    serde_json::from_reader(reader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {
                "population_key": "what is the capital of france",
                "lookup_query": "capital city of france",
                "expected_answer": "Paris",
                "expected_hit": true,
                "category": "match"
            },
            {
                "population_key": "what is the capital of spain",
                "lookup_query": "how do i bake sourdough bread",
                "expected_answer": "Madrid",
                "expected_hit": false,
                "category": "neg"
            }
        ]"#;
        let records = from_json_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category, Category::Match);
        assert!(!records[1].expected_hit);
    }

    #[test]
    fn test_from_json_str_rejects_bad_category() {
        let json = r#"[{
            "population_key": "k",
            "lookup_query": "q",
            "expected_answer": "a",
            "expected_hit": true,
            "category": "bogus"
        }]"#;
        assert!(from_json_str(json).is_err());
    }

    #[test]
    fn test_json_roundtrip_builtin() {
        let records = builtin();
        let json = serde_json::to_string(&records).unwrap();
        let back = from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(back, records);
    }
}
