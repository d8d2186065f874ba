//! Shared tabular ingestion: headerless CSV record iteration and the
//! generic keyed lookup store backing every data table.

use std::collections::HashMap;
use std::fs::File;
use std::ops::AddAssign;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use uplift_core::{UpliftError, UpliftResult};

/// Separator used to join key components for table lookups.
pub const KEY_SEPARATOR: &str = "|";

/// Joins key components with [`KEY_SEPARATOR`].
pub fn join_key(parts: &[&str]) -> String {
    parts.join(KEY_SEPARATOR)
}

/// Opens `path` and returns a lazy iterator over its comma-delimited
/// records, one per non-empty line, in file order. The iterator is finite
/// and cannot be restarted; reopen the file to read it again.
///
/// No field-count or type validation happens here. Short lines and
/// non-numeric fields surface as [`UpliftError::MalformedRecord`] in the
/// table that consumes them.
pub fn records(path: impl AsRef<Path>) -> UpliftResult<RecordIter> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);
    Ok(RecordIter {
        file: Arc::from(path.to_string_lossy().as_ref()),
        inner: reader.into_records(),
    })
}

/// Lazy record stream over one input file.
pub struct RecordIter {
    file: Arc<str>,
    inner: StringRecordsIntoIter<File>,
}

impl Iterator for RecordIter {
    type Item = UpliftResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        Some(match result {
            Ok(raw) => {
                let line = raw.position().map(|p| p.line()).unwrap_or(0);
                Ok(Record {
                    raw,
                    file: Arc::clone(&self.file),
                    line,
                })
            }
            Err(e) => Err(e.into()),
        })
    }
}

/// A single raw input record with its source position retained for error
/// reporting.
#[derive(Debug, Clone)]
pub struct Record {
    raw: StringRecord,
    file: Arc<str>,
    line: u64,
}

impl Record {
    /// Builds a record from in-memory fields, for programmatic table
    /// construction.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Self {
        Self {
            raw: fields.iter().map(|f| f.as_ref()).collect(),
            file: Arc::from("<memory>"),
            line: 0,
        }
    }

    /// Returns field `index`, or a `MalformedRecord` error when the line
    /// has too few fields.
    pub fn field(&self, index: usize) -> UpliftResult<&str> {
        self.raw
            .get(index)
            .ok_or_else(|| self.malformed(format!("missing field {index}")))
    }

    /// Parses field `index` as `T`. Surrounding whitespace is tolerated;
    /// anything else that fails to parse is a `MalformedRecord`.
    pub fn parse_field<T: FromStr>(&self, index: usize) -> UpliftResult<T> {
        let value = self.field(index)?;
        value
            .trim()
            .parse()
            .map_err(|_| self.malformed(format!("cannot parse field {index} from {value:?}")))
    }

    fn malformed(&self, reason: String) -> UpliftError {
        UpliftError::MalformedRecord {
            file: self.file.to_string(),
            line: self.line,
            reason,
        }
    }
}

/// How repeated keys combine while a table is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Later records replace earlier ones.
    Replace,
    /// Values for the same key are summed.
    Accumulate,
}

/// String-keyed lookup with a typed zero default, shared by all data
/// tables. The merge policy is the one behavioral axis on which the
/// tables differ.
#[derive(Debug, Clone, Default)]
pub struct KeyedTable<V> {
    entries: HashMap<String, V>,
}

impl<V> KeyedTable<V>
where
    V: Copy + Default + AddAssign,
{
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: String, value: V, policy: MergePolicy) {
        match policy {
            MergePolicy::Replace => {
                self.entries.insert(key, value);
            }
            MergePolicy::Accumulate => {
                *self.entries.entry(key).or_default() += value;
            }
        }
    }

    /// Returns the stored value, or `V`'s zero default for unknown keys.
    pub fn lookup(&self, key: &str) -> V {
        self.entries.get(key).copied().unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
