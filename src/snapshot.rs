use std::collections::BTreeMap;
use std::path::Path;

use crate::analyzers::{summarize, SourceSummary};
use crate::error::Result;
use crate::models::{Measure, MeasureSeries, RecordStore};
use crate::processors::{clean, lookup_temperature, LookupOutcome, ReferenceSets};
use crate::readers::DatasetReader;

/// Read-only snapshot of one dataset for the lifetime of a run.
///
/// Built once at startup; every report is a pure function of it. There is
/// no refresh — a new run re-reads the file from scratch.
#[derive(Debug)]
pub struct DatasetSnapshot {
    store: RecordStore,
    reference: ReferenceSets,
}

impl DatasetSnapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let store = DatasetReader::new().load(path)?;
        Self::from_store(store)
    }

    pub fn from_store(store: RecordStore) -> Result<Self> {
        let reference = ReferenceSets::derive(&store)?;
        Ok(Self { store, reference })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn reference(&self) -> &ReferenceSets {
        &self.reference
    }

    pub fn years(&self) -> &[i64] {
        self.reference.years()
    }

    pub fn sources(&self) -> &[String] {
        self.reference.sources()
    }

    pub fn lookup(&self, year: i64, source: &str) -> Result<LookupOutcome> {
        lookup_temperature(&self.store, year, source)
    }

    pub fn clean(&self, measure: Measure) -> Result<MeasureSeries> {
        clean(&self.store, measure)
    }

    /// Per-source statistics for one measure, cleaning included.
    pub fn summarize(&self, measure: Measure) -> Result<BTreeMap<String, SourceSummary>> {
        let series = self.clean(measure)?;
        Ok(summarize(&series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snapshot() -> DatasetSnapshot {
        let store = RecordStore::new(
            vec![
                "year".into(),
                "source".into(),
                "temperature".into(),
                "anomaly".into(),
            ],
            vec![
                vec!["1900".into(), "GISS".into(), "13.5".into(), "-0.2".into()],
                vec!["1901".into(), "HadCRUT".into(), "14.0".into(), "0.1".into()],
            ],
        );
        DatasetSnapshot::from_store(store).unwrap()
    }

    #[test]
    fn test_snapshot_surface() {
        let snap = snapshot();

        assert_eq!(snap.years(), &[1900, 1901]);
        assert_eq!(snap.sources(), &["GISS".to_string(), "HadCRUT".to_string()]);
        assert_eq!(snap.lookup(1900, "GISS").unwrap(), LookupOutcome::Found(13.5));
    }

    #[test]
    fn test_derivations_are_idempotent() {
        let snap = snapshot();

        let first = snap.clean(Measure::Anomaly).unwrap();
        let second = snap.clean(Measure::Anomaly).unwrap();
        assert_eq!(first.len(), second.len());

        let s1 = snap.summarize(Measure::Temperature).unwrap();
        let s2 = snap.summarize(Measure::Temperature).unwrap();
        let k1: Vec<_> = s1.keys().cloned().collect();
        let k2: Vec<_> = s2.keys().cloned().collect();
        assert_eq!(k1, k2);
        for key in s1.keys() {
            assert_eq!(s1[key].mean, s2[key].mean);
        }
    }
}
