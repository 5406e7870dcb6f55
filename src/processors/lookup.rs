use crate::error::Result;
use crate::models::RecordStore;
use crate::utils::constants::{COL_SOURCE, COL_TEMPERATURE, COL_YEAR, MISSING_SENTINEL};

/// Result of a point lookup.
///
/// `NoData` and `NotPresent` are ordinary outcomes, not errors: `NoData`
/// means a row exists for the key but its value is unavailable (the `NA`
/// sentinel), while `NotPresent` means no row carries the key at all.
/// Callers render them differently, so the distinction must survive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupOutcome {
    Found(f64),
    NoData,
    NotPresent,
}

/// Temperature for a (year, source) key, first matching row wins.
///
/// Source comparison is exact (no trimming) — callers are expected to pass
/// a value validated against the reference sets. Rows whose year field is
/// not an integer can never match.
pub fn lookup_temperature(store: &RecordStore, year: i64, source: &str) -> Result<LookupOutcome> {
    let rows = store.project(&[COL_YEAR, COL_SOURCE, COL_TEMPERATURE])?;

    for row in rows {
        let row_year = match row[0].trim().parse::<i64>() {
            Ok(y) => y,
            Err(_) => continue,
        };
        if row_year != year || row[1] != source {
            continue;
        }

        let raw = row[2].trim();
        if raw == MISSING_SENTINEL {
            return Ok(LookupOutcome::NoData);
        }
        return Ok(match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => LookupOutcome::Found(value),
            // Record exists but carries no usable value.
            _ => LookupOutcome::NoData,
        });
    }

    Ok(LookupOutcome::NotPresent)
}
