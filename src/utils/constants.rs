/// Dataset column names
pub const COL_YEAR: &str = "year";
pub const COL_SOURCE: &str = "source";
pub const COL_TEMPERATURE: &str = "temperature";
pub const COL_ANOMALY: &str = "anomaly";

/// Columns that must be present in the dataset header
pub const REQUIRED_COLUMNS: [&str; 4] = [COL_YEAR, COL_SOURCE, COL_TEMPERATURE, COL_ANOMALY];

/// Literal marker meaning "record exists, value unavailable"
pub const MISSING_SENTINEL: &str = "NA";
