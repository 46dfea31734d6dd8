//! Reads the raw delimited file into an untyped, column-named table.

use super::error::EtlError;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Source rows exactly as read, keyed by the header row's column names.
#[derive(Debug, Clone)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<StringRecord>,
}

impl RawTable {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the first column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Raw value at (`row`, `column`). Short rows read as empty.
    pub fn field(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or("")
    }

    fn from_reader<R: Read>(reader: R, delimiter: u8, path: &Path) -> Result<Self, EtlError> {
        let malformed = |source| EtlError::MalformedInput {
            path: path.to_path_buf(),
            source,
        };

        let mut csv_reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(malformed)?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result.map_err(malformed)?;
            if record.len() > headers.len() {
                return Err(EtlError::RaggedRow {
                    line: record.position().map(|p| p.line()).unwrap_or(0),
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            rows.push(record);
        }

        Ok(Self { headers, rows })
    }
}

/// Load the delimited file at `path`.
///
/// A missing or unreadable file is `MissingInput`; a file that cannot be
/// tokenized is `MalformedInput` or `RaggedRow`. Nothing is retried.
pub fn read_raw_table(path: &Path, delimiter: u8) -> Result<RawTable, EtlError> {
    let file = File::open(path).map_err(|source| EtlError::MissingInput {
        path: path.to_path_buf(),
        source,
    })?;
    RawTable::from_reader(file, delimiter, path)
}

#[cfg(test)]
pub(crate) fn raw_table_from_str(content: &str) -> RawTable {
    RawTable::from_reader(content.as_bytes(), b',', Path::new("inline.csv")).unwrap()
}
