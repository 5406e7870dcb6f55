use tracing::debug;

use crate::error::Result;
use crate::models::{Measure, MeasureSeries, RecordStore, SeriesRow};
use crate::utils::constants::{COL_SOURCE, COL_YEAR, MISSING_SENTINEL};

/// Produce a missing-free numeric view of one measure.
///
/// A row is dropped when its measure field is the `NA` sentinel, empty, or
/// fails `f64` coercion. Coercion failure is a data-quality signal, not an
/// error: dropped rows are counted in the series' `skipped` field and the
/// report carries on. Year and source travel along raw so consumers can
/// group and pivot by them.
pub fn clean(store: &RecordStore, measure: Measure) -> Result<MeasureSeries> {
    let projected = store.project(&[COL_YEAR, COL_SOURCE, measure.column()])?;

    let mut rows = Vec::with_capacity(projected.len());
    let mut skipped = 0usize;
    for row in projected {
        let raw = row[2].trim();
        if raw.is_empty() || raw == MISSING_SENTINEL {
            skipped += 1;
            continue;
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => rows.push(SeriesRow {
                year: row[0].to_string(),
                source: row[1].to_string(),
                value,
            }),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(measure = %measure, skipped, retained = rows.len(), "series cleaning dropped rows");
    }

    Ok(MeasureSeries {
        measure,
        rows,
        skipped,
    })
}
