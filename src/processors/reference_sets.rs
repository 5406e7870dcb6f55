use std::collections::BTreeSet;

use tracing::debug;

use crate::error::Result;
use crate::models::RecordStore;
use crate::utils::constants::{COL_SOURCE, COL_YEAR};

/// Validation domains derived from the dataset: the years and sources a
/// user may legitimately ask about.
///
/// Derivation is lenient by design. A row whose year is not an integer, or
/// whose source is blank after trimming, is excluded from the derived set
/// (never from the raw store) and counted rather than reported as an error —
/// partial data should not abort a report.
#[derive(Debug, Clone)]
pub struct ReferenceSets {
    years: Vec<i64>,
    sources: Vec<String>,
    pub skipped_years: usize,
    pub skipped_sources: usize,
}

impl ReferenceSets {
    pub fn derive(store: &RecordStore) -> Result<Self> {
        let mut years = BTreeSet::new();
        let mut skipped_years = 0usize;
        for row in store.project(&[COL_YEAR])? {
            match row[0].trim().parse::<i64>() {
                Ok(year) => {
                    years.insert(year);
                }
                Err(_) => skipped_years += 1,
            }
        }

        let mut sources = BTreeSet::new();
        let mut skipped_sources = 0usize;
        for row in store.project(&[COL_SOURCE])? {
            let trimmed = row[0].trim();
            if trimmed.is_empty() {
                skipped_sources += 1;
            } else {
                sources.insert(trimmed.to_string());
            }
        }

        if skipped_years > 0 || skipped_sources > 0 {
            debug!(skipped_years, skipped_sources, "reference set derivation skipped rows");
        }

        Ok(Self {
            years: years.into_iter().collect(),
            sources: sources.into_iter().collect(),
            skipped_years,
            skipped_sources,
        })
    }

    /// Valid years, sorted ascending.
    pub fn years(&self) -> &[i64] {
        &self.years
    }

    /// Valid sources, sorted lexicographically.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn contains_year(&self, year: i64) -> bool {
        self.years.binary_search(&year).is_ok()
    }

    pub fn contains_source(&self, source: &str) -> bool {
        self.sources.iter().any(|s| s == source)
    }

    /// Inclusive (min, max) of the valid years, for prompting.
    pub fn year_range(&self) -> Option<(i64, i64)> {
        match (self.years.first(), self.years.last()) {
            (Some(&min), Some(&max)) => Some((min, max)),
            _ => None,
        }
    }
}
