use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BenchError {
    #[error("empty dataset: at least one record is required")]
    EmptyDataset,

    #[error("population failed on key {key:?}: {reason}")]
    Population { key: String, reason: String },

    #[error("lookup failed on query {query:?}: {reason}")]
    Lookup { query: String, reason: String },
}

pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = BenchError::EmptyDataset;
        assert_eq!(e.to_string(), "empty dataset: at least one record is required");

        let e = BenchError::Population {
            key: "what is the capital of france".into(),
            reason: "index unavailable".into(),
        };
        assert_eq!(
            e.to_string(),
            "population failed on key \"what is the capital of france\": index unavailable"
        );

        let e = BenchError::Lookup {
            query: "capital city of france".into(),
            reason: "backend timeout".into(),
        };
        assert_eq!(
            e.to_string(),
            "lookup failed on query \"capital city of france\": backend timeout"
        );
    }

    #[test]
    fn test_error_clone_eq() {
        let e1 = BenchError::EmptyDataset;
        let e2 = e1.clone();
        assert_eq!(e1, e2);
    }
}
