//! Amortized cost fractions per action.

use std::path::Path;

use uplift_core::UpliftResult;

use crate::tabular::{self, KeyedTable, MergePolicy, Record};

/// Amortized cost fraction keyed by action name. Duplicate keys keep the
/// last record seen.
#[derive(Debug, Clone, Default)]
pub struct ActionCostTable {
    costs: KeyedTable<f64>,
}

impl ActionCostTable {
    /// Builds the table from raw (action, cost) records.
    pub fn build(records: impl IntoIterator<Item = UpliftResult<Record>>) -> UpliftResult<Self> {
        let mut costs = KeyedTable::new();
        for record in records {
            let record = record?;
            let key = record.field(0)?.to_string();
            let cost: f64 = record.parse_field(1)?;
            costs.insert(key, cost, MergePolicy::Replace);
        }
        Ok(Self { costs })
    }

    /// Reads the action cost file at `path`.
    pub fn load(path: impl AsRef<Path>) -> UpliftResult<Self> {
        Self::build(tabular::records(path)?)
    }

    /// Cost fraction for `action`; 0.0 for unknown actions.
    pub fn lookup(&self, action: &str) -> f64 {
        self.costs.lookup(action)
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}
