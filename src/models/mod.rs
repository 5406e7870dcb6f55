pub mod dataset;
pub mod measure;
pub mod series;

pub use dataset::RecordStore;
pub use measure::Measure;
pub use series::{MeasureSeries, PivotTable, SeriesRow};
