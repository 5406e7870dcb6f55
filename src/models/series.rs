use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::Measure;

/// One retained row of a cleaned series.
///
/// Year and source are kept raw so downstream grouping and pivoting see
/// exactly what the dataset carried; only the measure value is coerced.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesRow {
    pub year: String,
    pub source: String,
    pub value: f64,
}

/// A missing-free numeric view of one measure.
///
/// Rows whose measure field was missing or failed numeric coercion are
/// dropped during cleaning; `skipped` counts them so the data loss is
/// observable instead of silent.
#[derive(Debug, Clone, Serialize)]
pub struct MeasureSeries {
    pub measure: Measure,
    pub rows: Vec<SeriesRow>,
    pub skipped: usize,
}

impl MeasureSeries {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reshape into a year × source table for a renderer.
    ///
    /// Years sort numerically where they parse as integers (non-numeric
    /// years sort after, lexicographically); sources sort lexicographically.
    /// Cells with no observation are `None`; duplicate (year, source) cells
    /// keep the first value in file order, mirroring point lookup.
    pub fn pivot(&self) -> PivotTable {
        let years: Vec<String> = {
            let mut seen: Vec<&str> = self
                .rows
                .iter()
                .map(|r| r.year.as_str())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();
            seen.sort_by_key(|y| match y.parse::<i64>() {
                Ok(n) => (0, n, y.to_string()),
                Err(_) => (1, 0, y.to_string()),
            });
            seen.into_iter().map(String::from).collect()
        };

        let sources: Vec<String> = self
            .rows
            .iter()
            .map(|r| r.source.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut cells = vec![vec![None; sources.len()]; years.len()];
        for row in &self.rows {
            let yi = years.iter().position(|y| *y == row.year);
            let si = sources.iter().position(|s| *s == row.source);
            if let (Some(yi), Some(si)) = (yi, si) {
                if cells[yi][si].is_none() {
                    cells[yi][si] = Some(row.value);
                }
            }
        }

        PivotTable {
            years,
            sources,
            cells,
        }
    }
}

/// Year × source grid of one measure, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct PivotTable {
    pub years: Vec<String>,
    pub sources: Vec<String>,
    pub cells: Vec<Vec<Option<f64>>>,
}
