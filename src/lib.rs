pub mod analyzers;
pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod snapshot;
pub mod utils;

pub use error::{ReportError, Result};
pub use snapshot::DatasetSnapshot;
