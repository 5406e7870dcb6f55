use std::fs::File;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ReportError, Result};
use crate::models::RecordStore;
use crate::utils::constants::REQUIRED_COLUMNS;

/// Loads the dataset CSV into an immutable [`RecordStore`].
pub struct DatasetReader {
    flexible: bool,
}

impl DatasetReader {
    pub fn new() -> Self {
        Self { flexible: true }
    }

    /// Require every row to have exactly as many fields as the header.
    pub fn with_strict_rows(mut self) -> Self {
        self.flexible = false;
        self
    }

    /// Read the dataset file once and snapshot it.
    ///
    /// Fails with `DatasetNotFound` when the file cannot be opened and
    /// `DatasetMalformed` when the header lacks any of the required columns
    /// (`year`, `source`, `temperature`, `anomaly`). Extra columns are kept
    /// but ignored by the derivations.
    pub fn load(&self, path: &Path) -> Result<RecordStore> {
        let file = File::open(path).map_err(|_| ReportError::DatasetNotFound {
            path: path.to_path_buf(),
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .flexible(self.flexible)
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| !headers.iter().any(|h| h == *c))
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ReportError::DatasetMalformed { missing });
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(String::from).collect());
        }

        info!(
            path = %path.display(),
            records = rows.len(),
            columns = headers.len(),
            "dataset loaded"
        );
        debug!(?headers, "dataset header");

        Ok(RecordStore::new(headers, rows))
    }
}

impl Default for DatasetReader {
    fn default() -> Self {
        Self::new()
    }
}
