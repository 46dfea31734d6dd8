use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions raised before anything is written to the store.
#[derive(Debug, Error)]
pub enum EtlError {
    #[error("Failed to read input file {path:?}: {source}")]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed input file {path:?}: {source}")]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed input at line {line}: expected at most {expected} fields, found {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Missing required columns in input: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Failed to create output directory {path:?}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_names_every_column() {
        let err = EtlError::MissingColumns(vec!["energy".to_string(), "tempo".to_string()]);
        assert_eq!(
            err.to_string(),
            "Missing required columns in input: energy, tempo"
        );
    }
}
