//! Population counts per (state, persona) pair.

use std::path::Path;

use uplift_core::UpliftResult;

use crate::tabular::{self, join_key, KeyedTable, MergePolicy, Record};

/// User counts keyed by `state|persona`. Duplicate keys keep the last
/// record seen.
#[derive(Debug, Clone, Default)]
pub struct PopulationTable {
    counts: KeyedTable<u64>,
}

impl PopulationTable {
    /// Builds the table from raw (state, persona, count) records.
    pub fn build(records: impl IntoIterator<Item = UpliftResult<Record>>) -> UpliftResult<Self> {
        let mut counts = KeyedTable::new();
        for record in records {
            let record = record?;
            let key = join_key(&[record.field(0)?, record.field(1)?]);
            let count: u64 = record.parse_field(2)?;
            counts.insert(key, count, MergePolicy::Replace);
        }
        Ok(Self { counts })
    }

    /// Reads the journey population file at `path`.
    pub fn load(path: impl AsRef<Path>) -> UpliftResult<Self> {
        Self::build(tabular::records(path)?)
    }

    /// Users currently in `state` for `persona`; 0 for unknown pairs.
    pub fn lookup(&self, state: &str, persona: &str) -> u64 {
        self.counts.lookup(&join_key(&[state, persona]))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uplift_core::UpliftError;

    fn row(fields: [&str; 3]) -> UpliftResult<Record> {
        Ok(Record::from_fields(&fields))
    }

    #[test]
    fn test_duplicate_key_keeps_last_record() {
        let table = PopulationTable::build(vec![
            row(["aware", "Jane Doe", "120"]),
            row(["aware", "Jane Doe", "450"]),
        ])
        .unwrap();

        assert_eq!(table.lookup("aware", "Jane Doe"), 450);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_unknown_pair_defaults_to_zero() {
        let table = PopulationTable::build(vec![row(["aware", "Jane Doe", "120"])]).unwrap();
        assert_eq!(table.lookup("aware", "John Brown"), 0);
        assert_eq!(table.lookup("engaged", "Jane Doe"), 0);
    }

    #[test]
    fn test_non_integer_count_aborts_build() {
        let result = PopulationTable::build(vec![row(["aware", "Jane Doe", "12.5"])]);
        assert!(matches!(
            result.unwrap_err(),
            UpliftError::MalformedRecord { .. }
        ));
    }
}
