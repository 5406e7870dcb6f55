use std::collections::BTreeMap;

use crate::analyzers::SourceSummary;
use crate::models::PivotTable;
use crate::processors::LookupOutcome;

/// User-facing text for a point lookup.
///
/// NoData and NotPresent read differently on purpose: one is a known gap in
/// the dataset, the other means the key matched nothing at all.
pub fn render_lookup(outcome: &LookupOutcome, year: i64, source: &str) -> String {
    match outcome {
        LookupOutcome::Found(value) => {
            format!("Temperature for source '{source}' in year {year}: {value}")
        }
        LookupOutcome::NoData => {
            format!("No valid temperature record found for source '{source}' in year {year}.")
        }
        LookupOutcome::NotPresent => {
            format!("No record exists for source '{source}' in year {year}.")
        }
    }
}

/// Column-aligned statistics table, one row per source.
pub fn render_summary(summary: &BTreeMap<String, SourceSummary>) -> String {
    if summary.is_empty() {
        return "No data to summarize.".to_string();
    }

    let source_width = summary
        .keys()
        .map(|s| s.len())
        .chain(std::iter::once("source".len()))
        .max()
        .unwrap_or(6);

    let mut out = format!(
        "{:<source_width$}  {:>5}  {:>10}  {:>10}  {:>10}  {:>10}\n",
        "source", "count", "mean", "std", "max", "min"
    );
    for (source, stats) in summary {
        out.push_str(&format!(
            "{:<source_width$}  {:>5}  {:>10.4}  {:>10}  {:>10.4}  {:>10.4}\n",
            source,
            stats.count,
            stats.mean,
            format_stat(stats.std),
            stats.max,
            stats.min
        ));
    }
    out
}

/// Year × source grid with `NA` holes.
pub fn render_pivot(pivot: &PivotTable) -> String {
    if pivot.years.is_empty() {
        return "No data to tabulate.".to_string();
    }

    let year_width = pivot
        .years
        .iter()
        .map(|y| y.len())
        .chain(std::iter::once("year".len()))
        .max()
        .unwrap_or(4);
    let col_widths: Vec<usize> = pivot.sources.iter().map(|s| s.len().max(8)).collect();

    let mut out = format!("{:<year_width$}", "year");
    for (source, &width) in pivot.sources.iter().zip(&col_widths) {
        out.push_str(&format!("  {:>width$}", source));
    }
    out.push('\n');

    for (yi, year) in pivot.years.iter().enumerate() {
        out.push_str(&format!("{:<year_width$}", year));
        for (si, &width) in col_widths.iter().enumerate() {
            match pivot.cells[yi][si] {
                Some(value) => out.push_str(&format!("  {:>width$.4}", value)),
                None => out.push_str(&format!("  {:>width$}", "NA")),
            }
        }
        out.push('\n');
    }
    out
}

fn format_stat(value: f64) -> String {
    if value.is_nan() {
        "NA".to_string()
    } else {
        format!("{value:.4}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Measure, MeasureSeries, SeriesRow};

    #[test]
    fn test_lookup_messages_are_distinct() {
        let found = render_lookup(&LookupOutcome::Found(13.5), 1900, "GISS");
        let no_data = render_lookup(&LookupOutcome::NoData, 1900, "GISS");
        let absent = render_lookup(&LookupOutcome::NotPresent, 1900, "GISS");

        assert!(found.contains("13.5"));
        assert_ne!(no_data, absent);
    }

    #[test]
    fn test_summary_table_prints_nan_std_as_na() {
        let mut summary = BTreeMap::new();
        summary.insert(
            "GISS".to_string(),
            SourceSummary {
                count: 1,
                mean: 13.5,
                std: f64::NAN,
                max: 13.5,
                min: 13.5,
            },
        );

        let table = render_summary(&summary);
        assert!(table.contains("GISS"));
        assert!(table.contains("NA"));
        assert!(!table.contains("NaN"));
    }

    #[test]
    fn test_pivot_table_marks_holes() {
        let series = MeasureSeries {
            measure: Measure::Temperature,
            rows: vec![
                SeriesRow {
                    year: "1900".into(),
                    source: "GISS".into(),
                    value: 13.5,
                },
                SeriesRow {
                    year: "1901".into(),
                    source: "HadCRUT".into(),
                    value: 14.0,
                },
            ],
            skipped: 0,
        };

        let table = render_pivot(&series.pivot());
        assert!(table.contains("GISS"));
        assert!(table.contains("HadCRUT"));
        assert!(table.contains("NA"));
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(render_summary(&BTreeMap::new()), "No data to summarize.");
    }
}
