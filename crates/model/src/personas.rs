//! Opportunity-cost weights per persona.

use std::path::Path;

use uplift_core::UpliftResult;

use crate::tabular::{self, KeyedTable, MergePolicy, Record};

/// Opportunity-cost weight keyed by persona name. Duplicate keys keep the
/// last record seen.
#[derive(Debug, Clone, Default)]
pub struct PersonaWeightTable {
    weights: KeyedTable<f64>,
}

impl PersonaWeightTable {
    /// Builds the table from raw (persona, weight) records.
    pub fn build(records: impl IntoIterator<Item = UpliftResult<Record>>) -> UpliftResult<Self> {
        let mut weights = KeyedTable::new();
        for record in records {
            let record = record?;
            let key = record.field(0)?.to_string();
            let weight: f64 = record.parse_field(1)?;
            weights.insert(key, weight, MergePolicy::Replace);
        }
        Ok(Self { weights })
    }

    /// Reads the personae file at `path`.
    pub fn load(path: impl AsRef<Path>) -> UpliftResult<Self> {
        Self::build(tabular::records(path)?)
    }

    /// Opportunity-cost weight for `persona`; 0.0 for unknown personae.
    pub fn lookup(&self, persona: &str) -> f64 {
        self.weights.lookup(persona)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
