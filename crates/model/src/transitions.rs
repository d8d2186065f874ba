//! Aggregation of transition probability mass toward desirable and
//! undesirable journey states.

use std::path::Path;

use tracing::debug;
use uplift_core::UpliftResult;

use crate::states::{StateClass, StateClassifier};
use crate::tabular::{self, join_key, KeyedTable, MergePolicy, Record};

/// Aggregated transition mass per (persona, action, source state) key.
///
/// `p_good` sums the probability flowing into desirable target states,
/// `p_bad` the probability flowing into undesirable ones. Mass toward
/// neutral targets is dropped, not tracked.
#[derive(Debug, Clone, Default)]
pub struct TransitionTable {
    p_good: KeyedTable<f64>,
    p_bad: KeyedTable<f64>,
}

impl TransitionTable {
    /// Aggregates raw (persona, action, source state, target state,
    /// probability) records. Records with the same key and target class
    /// combine by addition, independent of record order.
    pub fn build(
        records: impl IntoIterator<Item = UpliftResult<Record>>,
        classifier: &StateClassifier,
    ) -> UpliftResult<Self> {
        let mut table = Self::default();
        for record in records {
            let record = record?;
            let target_state = record.field(3)?;
            let probability: f64 = record.parse_field(4)?;

            let side = match classifier.classify(target_state) {
                StateClass::Desirable => &mut table.p_good,
                StateClass::Undesirable => &mut table.p_bad,
                StateClass::Neutral => continue,
            };
            let key = join_key(&[record.field(0)?, record.field(1)?, record.field(2)?]);
            side.insert(key, probability, MergePolicy::Accumulate);
        }
        debug!(
            good_keys = table.p_good.len(),
            bad_keys = table.p_bad.len(),
            "transition table built"
        );
        Ok(table)
    }

    /// Reads and aggregates the transitions file at `path`.
    pub fn load(path: impl AsRef<Path>, classifier: &StateClassifier) -> UpliftResult<Self> {
        Self::build(tabular::records(path)?, classifier)
    }

    /// Accumulated (p_good, p_bad) for the triple.
    ///
    /// Both masses must be on record for the key: a triple for which only
    /// desirable (or only undesirable) transitions were observed reads as
    /// (0.0, 0.0), the same as a triple never seen at all.
    pub fn lookup(&self, persona: &str, action: &str, source_state: &str) -> (f64, f64) {
        let key = join_key(&[persona, action, source_state]);
        if self.p_good.contains_key(&key) && self.p_bad.contains_key(&key) {
            (self.p_good.lookup(&key), self.p_bad.lookup(&key))
        } else {
            (0.0, 0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uplift_core::UpliftError;

    fn transition(fields: [&str; 5]) -> UpliftResult<Record> {
        Ok(Record::from_fields(&fields))
    }

    fn build(rows: Vec<UpliftResult<Record>>) -> UpliftResult<TransitionTable> {
        TransitionTable::build(rows, &StateClassifier::builtin())
    }

    #[test]
    fn test_accumulates_good_and_bad_mass() {
        let table = build(vec![
            transition(["Jane Doe", "email1", "aware", "purchased", "0.3"]),
            transition(["Jane Doe", "email1", "aware", "engaged", "0.3"]),
            transition(["Jane Doe", "email1", "aware", "exited", "0.1"]),
            transition(["Jane Doe", "email1", "aware", "qualified lead", "0.3"]),
        ])
        .unwrap();

        let (p_good, p_bad) = table.lookup("Jane Doe", "email1", "aware");
        assert!((p_good - 0.6).abs() < 1e-12);
        assert!((p_bad - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_only_desirable_mass_reads_as_zero() {
        let table = build(vec![
            transition(["Jane Doe", "email1", "aware", "purchased", "0.9"]),
        ])
        .unwrap();

        assert_eq!(table.lookup("Jane Doe", "email1", "aware"), (0.0, 0.0));
    }

    #[test]
    fn test_unknown_key_reads_as_zero() {
        let table = build(vec![
            transition(["Jane Doe", "email1", "aware", "purchased", "0.5"]),
            transition(["Jane Doe", "email1", "aware", "exited", "0.2"]),
        ])
        .unwrap();

        assert_eq!(table.lookup("John Brown", "email1", "aware"), (0.0, 0.0));
        assert_eq!(table.lookup("Jane Doe", "call1", "aware"), (0.0, 0.0));
    }

    #[test]
    fn test_aggregation_is_order_independent() {
        let rows = [
            ["Jane Doe", "ad1", "aware", "purchased", "0.2"],
            ["Jane Doe", "ad1", "aware", "engaged", "0.4"],
            ["Jane Doe", "ad1", "aware", "annoyed", "0.15"],
            ["Jane Doe", "ad1", "aware", "exited", "0.05"],
        ];

        let forward = build(rows.iter().map(|r| transition(*r)).collect()).unwrap();
        let reversed = build(rows.iter().rev().map(|r| transition(*r)).collect()).unwrap();

        let (fg, fb) = forward.lookup("Jane Doe", "ad1", "aware");
        let (rg, rb) = reversed.lookup("Jane Doe", "ad1", "aware");
        assert!((fg - rg).abs() < 1e-12);
        assert!((fb - rb).abs() < 1e-12);
        assert!((fg - 0.6).abs() < 1e-12);
        assert!((fb - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_neutral_target_mass_is_dropped() {
        let table = build(vec![
            transition(["Jane Doe", "ad1", "aware", "qualified lead", "0.7"]),
            transition(["Jane Doe", "ad1", "aware", "somewhere-new", "0.3"]),
        ])
        .unwrap();

        assert_eq!(table.lookup("Jane Doe", "ad1", "aware"), (0.0, 0.0));
    }

    #[test]
    fn test_malformed_probability_aborts_build() {
        let result = build(vec![
            transition(["Jane Doe", "ad1", "aware", "purchased", "0.5"]),
            transition(["Jane Doe", "ad1", "aware", "exited", "oops"]),
        ]);

        assert!(matches!(
            result.unwrap_err(),
            UpliftError::MalformedRecord { .. }
        ));
    }

    #[test]
    fn test_short_record_aborts_build() {
        let result = build(vec![Ok(Record::from_fields(&["Jane Doe", "ad1", "aware"]))]);
        assert!(matches!(
            result.unwrap_err(),
            UpliftError::MalformedRecord { .. }
        ));
    }
}
