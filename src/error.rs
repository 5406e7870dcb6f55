use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Dataset file not found or unreadable: {path}")]
    DatasetNotFound { path: PathBuf },

    #[error("Dataset is malformed: missing required columns {missing:?}")]
    DatasetMalformed { missing: Vec<String> },

    #[error("Unknown column requested: '{0}'")]
    UnknownColumn(String),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}
