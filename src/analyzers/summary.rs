use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::MeasureSeries;

/// Descriptive statistics for one source's cleaned values.
///
/// `std` is the sample standard deviation (n − 1 denominator); a group of a
/// single observation has an undefined deviation and carries `NaN`, never 0.
/// When serialized to JSON the NaN renders as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub max: f64,
    pub min: f64,
}

/// Group a cleaned series by source and summarize each group.
///
/// Grouping uses the series' raw source values as-is: cleaning only filters
/// on the measure, so an untrimmed or oddly-cased source forms its own
/// group. The BTreeMap keeps output order lexicographic and reproducible.
pub fn summarize(series: &MeasureSeries) -> BTreeMap<String, SourceSummary> {
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for row in &series.rows {
        groups.entry(row.source.clone()).or_default().push(row.value);
    }

    groups
        .into_iter()
        .map(|(source, values)| (source, summarize_group(&values)))
        .collect()
}

fn summarize_group(values: &[f64]) -> SourceSummary {
    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);

    let std = if count > 1 {
        let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (sum_sq / (count - 1) as f64).sqrt()
    } else {
        f64::NAN
    };

    SourceSummary {
        count,
        mean,
        std,
        max,
        min,
    }
}
