use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::utils::constants::{COL_ANOMALY, COL_TEMPERATURE};

/// One of the two numeric fields the reports are built over.
///
/// Temperature and anomaly share a single cleaning and aggregation pipeline
/// parameterized by this enum, so the two cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    Temperature,
    Anomaly,
}

impl Measure {
    /// Dataset column holding this measure's values.
    pub fn column(&self) -> &'static str {
        match self {
            Measure::Temperature => COL_TEMPERATURE,
            Measure::Anomaly => COL_ANOMALY,
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_column_names() {
        assert_eq!(Measure::Temperature.column(), "temperature");
        assert_eq!(Measure::Anomaly.column(), "anomaly");
    }
}
