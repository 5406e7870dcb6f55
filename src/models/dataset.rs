use crate::error::{ReportError, Result};

/// In-memory snapshot of the dataset file.
///
/// Holds the header and every row exactly as parsed, in file order. Values
/// stay raw strings; typed views are derived by the processors, never by
/// mutating the store.
#[derive(Debug, Clone)]
pub struct RecordStore {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RecordStore {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column in the header, or `UnknownColumn` if absent.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ReportError::UnknownColumn(name.to_string()))
    }

    /// Restrict rows to the requested columns, in the order given.
    ///
    /// Values are returned unconverted and rows keep file order. Rows too
    /// short to cover a requested column yield an empty field, matching how
    /// a ragged CSV row reads as blank cells.
    pub fn project(&self, columns: &[&str]) -> Result<Vec<Vec<&str>>> {
        let indices = columns
            .iter()
            .map(|c| self.column_index(c))
            .collect::<Result<Vec<_>>>()?;

        Ok(self
            .rows
            .iter()
            .map(|row| {
                indices
                    .iter()
                    .map(|&i| row.get(i).map(String::as_str).unwrap_or(""))
                    .collect()
            })
            .collect())
    }
}
